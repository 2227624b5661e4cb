//! Client Module
//!
//! Read-through PokeAPI client. Responses are cached by request URL so paging
//! back and forth through the listing only hits the network once per page.

mod poke;

pub use poke::PokeClient;
