#![allow(dead_code)]

pub mod fixtures;
pub mod synthetic_image;
