pub mod bookmark;
pub mod cart;
pub mod compare;
pub mod product;

pub use bookmark::{BookmarkItem, BookmarkList};
pub use cart::{CartLineItem, ManufacturerGroup, QuoteCart};
pub use compare::{CompareItem, CompareList, CompareOutcome, MAX_COMPARE_ITEMS};
pub use product::{
    Manufacturer, Product, ProductDocument, ProductId, ProductImage, ReferenceEntry, SpecRange,
    Specifications,
};
