pub mod address_service;
