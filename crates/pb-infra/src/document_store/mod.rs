mod diesel_store;

pub use diesel_store::DieselDocumentStore;
