pub mod model;
pub mod placeholder;
pub mod repository;
pub mod rest;
pub mod service;
