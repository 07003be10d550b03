use eld_core::{DutyStatus, EldError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route has no segments")]
    EmptyRoute,

    #[error("{0} is not a rest status; rests must be off duty or sleeper berth")]
    InvalidRestStatus(DutyStatus),

    #[error(transparent)]
    Core(#[from] EldError),
}

pub type RouteResult<T> = Result<T, RouteError>;
