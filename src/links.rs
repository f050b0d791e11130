use url::Url;

use super::{Coordinates, Result, RideRequest};

pub const UBER_BASE_URL: &str = "https://m.uber.com/ul/";
pub const LYFT_BASE_URL: &str = "lyft://ridetype";
pub const LYFT_RIDE_TYPE: &str = "lyft";

/// One end of the ride as it goes into a link.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub address: &'a str,
    pub coordinates: Option<Coordinates>,
}

impl<'a> Endpoint<'a> {
    pub fn new(address: &'a str, coordinates: Option<Coordinates>) -> Endpoint<'a> {
        Endpoint {
            address,
            coordinates,
        }
    }

    fn push_params(&self, params: &mut Vec<(String, String)>, prefix: &str, address_field: &str) {
        if let Some(c) = self.coordinates {
            params.push((format!("{}[latitude]", prefix), c.latitude.to_string()));
            params.push((format!("{}[longitude]", prefix), c.longitude.to_string()));
        }
        params.push((
            format!("{}[{}]", prefix, address_field),
            self.address.to_owned(),
        ));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeepLinks {
    pub uber: Url,
    pub lyft: Url,
}

impl DeepLinks {
    /// Builds both app links. Each endpoint carries coordinates only when
    /// they were resolved for it.
    pub fn build(client_id: &str, pickup: Endpoint, dropoff: Endpoint) -> Result<DeepLinks> {
        Ok(DeepLinks {
            uber: uber_link(client_id, pickup, dropoff)?,
            lyft: lyft_link(pickup, dropoff)?,
        })
    }

    pub fn from_request(
        client_id: &str,
        ride: &RideRequest,
        pickup: Option<Coordinates>,
        dropoff: Option<Coordinates>,
    ) -> Result<DeepLinks> {
        DeepLinks::build(
            client_id,
            Endpoint::new(&ride.pickup, pickup),
            Endpoint::new(&ride.dropoff, dropoff),
        )
    }
}

fn uber_link(client_id: &str, pickup: Endpoint, dropoff: Endpoint) -> Result<Url> {
    let mut params = vec![
        ("action".to_owned(), "setPickup".to_owned()),
        ("client_id".to_owned(), client_id.to_owned()),
    ];
    pickup.push_params(&mut params, "pickup", "formatted_address");
    dropoff.push_params(&mut params, "dropoff", "formatted_address");
    Ok(Url::parse_with_params(UBER_BASE_URL, &params)?)
}

fn lyft_link(pickup: Endpoint, dropoff: Endpoint) -> Result<Url> {
    let mut params = vec![("id".to_owned(), LYFT_RIDE_TYPE.to_owned())];
    pickup.push_params(&mut params, "pickup", "address");
    dropoff.push_params(&mut params, "destination", "address");
    Ok(Url::parse_with_params(LYFT_BASE_URL, &params)?)
}
