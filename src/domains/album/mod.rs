pub mod model;
pub mod repository;
pub mod rest;
pub mod service;
