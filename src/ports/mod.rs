/// Ports layer - Interface definitions for infrastructure
///
/// Following hexagonal architecture, ports define the seams between the
/// application core and everything outside it (durable storage, the hosted
/// database service, the quote endpoint, user notices).
pub mod outbound;
