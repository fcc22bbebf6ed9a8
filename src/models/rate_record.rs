use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct RateRecord {
    sale: f64,
    purchase: f64,
}
