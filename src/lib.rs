#![deny(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), no_std)]

pub mod menu;
