pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type RouteId = usize;
