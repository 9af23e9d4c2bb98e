pub mod entities;
pub mod entries;
pub mod normalization;
pub mod registry;
pub mod repositories;
pub mod value_objects;
