pub use crate::config::{ConfigError, load_config, load_config_or_default};
pub use crate::domain::config::ApiConfig;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
