use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::account::{Account, SessionPrincipal},
};
use test_utils::{builder::TestBuilder, factory};

mod require;
