// Module layout (Clean Architecture style)
// - bootstrap: configuration and dependency wiring
// - infrastructure: Postgres repositories, password hashing, token signing
// - presentation: HTTP handlers, routing, error responses
// - application: ports, use cases, service errors

pub mod application;
pub mod bootstrap;
pub mod infrastructure;
pub mod presentation;
