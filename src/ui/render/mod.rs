mod all;
mod explore;
mod favorites;
mod footer;
mod header;
mod home;
mod log;
mod nav;
mod recipe_card;
mod recipe_detail;

use self::log::log;
use super::*;
use explore::explore;
use favorites::favorites;
use footer::footer;
use header::header;
use home::home;
use nav::nav;
use recipe_detail::recipe_detail;

pub use all::all as render;
