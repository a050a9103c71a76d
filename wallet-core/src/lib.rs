pub mod display;

pub mod error;

pub mod navigator;

pub mod selection;
