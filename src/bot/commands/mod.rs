pub mod shift;

use crate::bot::{Data, Error};

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![shift::checkin(), shift::checkout()]
}
