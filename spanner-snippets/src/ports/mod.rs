pub mod admin;
pub mod data;

pub use admin::{DatabaseAdmin, PendingOperation};
pub use data::DataClient;

/// The two client handles a command may use, created once per process.
#[derive(Clone, Copy)]
pub struct Clients<'a> {
    pub admin: &'a dyn DatabaseAdmin,
    pub data: &'a dyn DataClient,
}

impl<'a> Clients<'a> {
    pub const fn new(admin: &'a dyn DatabaseAdmin, data: &'a dyn DataClient) -> Self {
        Self { admin, data }
    }
}
