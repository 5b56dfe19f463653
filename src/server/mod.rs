//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for persistence.
//! Balances, seat counters and order assignment are kept consistent by conditional
//! updates inside database transactions; the database is the only synchronization
//! point between concurrent requests.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Workflows: ledger, orders, seats, funds requests, notifications
//! - **Data Layer** (`data/`) - Repositories over `ConnectionTrait`, usable on the pool or in a transaction
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session principal storage and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, notifier, payment provider, app URL)
//! - **Startup** (`startup`) - Initialization of database, sessions, channels, and the bootstrap admin
//! - **Router** (`router`) - Route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks access through `AuthGuard`, converts DTOs to params, calls service
//! 3. **Service** runs the workflow, opening a transaction where several writes must agree
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** dispatches notifications after commit and returns the domain model
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
