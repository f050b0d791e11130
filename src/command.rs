use super::{ErrorKind, Result};

const DELIMITER: &str = " to ";

/// A pickup and a dropoff, both trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideRequest {
    pub pickup: String,
    pub dropoff: String,
}

impl RideRequest {
    /// Splits `/fare` text on the first `" to "`.
    ///
    /// Anything after the first delimiter belongs to the dropoff, so
    /// `"A to B to C"` is a ride from `A` to `B to C`. The delimiter is
    /// looked up before trimming, so `"  to  "` has a delimiter and two blank
    /// sides rather than no delimiter at all.
    pub fn parse(text: &str) -> Result<RideRequest> {
        let (pickup, dropoff) = match text.split_once(DELIMITER) {
            Some(parts) => parts,
            None => bail!(ErrorKind::MalformedCommand),
        };
        let (pickup, dropoff) = (pickup.trim(), dropoff.trim());
        if pickup.is_empty() || dropoff.is_empty() {
            bail!(ErrorKind::MissingEndpoint);
        }
        Ok(RideRequest {
            pickup: pickup.to_owned(),
            dropoff: dropoff.to_owned(),
        })
    }
}
