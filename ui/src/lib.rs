//! Shared UI crate for Labdash: the data layer, the report pipeline and the
//! dashboard views. Platform shells only launch a window around [`views::Dashboard`].

pub mod components;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod i18n;
pub mod report;
pub mod views;
