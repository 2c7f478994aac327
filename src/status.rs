//! [`BoolResponse`]

use serde::{Deserialize, Serialize};

/// API liveness flag, returned by the `checkapi` endpoint.
#[derive(Debug, Default, Hash, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolResponse {
	/// Whether the API is online.
	pub result: bool,
}
