//! Backend service clients: commune lookup and webhook delivery.


pub mod api;
