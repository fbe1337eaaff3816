pub mod contact;

pub use contact::{
    ContactResponse, ContactTransport, HttpTransport, TransportError, CONTACT_ENDPOINT,
};
