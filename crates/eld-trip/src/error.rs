use eld_core::EldError;
use eld_hos::HosError;
use eld_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TripError {
    #[error("trip has no route segments")]
    EmptyRoute,

    #[error("trip planner configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] EldError),

    #[error("rule set error: {0}")]
    Rules(#[from] HosError),

    #[error("could not parse trip request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read trip request: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RouteError> for TripError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::EmptyRoute => TripError::EmptyRoute,
            RouteError::InvalidRestStatus(status) => {
                TripError::Config(format!("{status} cannot be used for rests"))
            }
            RouteError::Core(e) => TripError::Core(e),
        }
    }
}

pub type TripResult<T> = Result<T, TripError>;
