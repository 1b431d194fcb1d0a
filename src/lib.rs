//! Art Space - a terminal art gallery
//!
//! The carousel core ([`carousel`], [`catalog`], [`events`]) has no terminal
//! dependency: any host can subscribe to a [`carousel::CarouselController`]
//! and feed it inputs. The remaining modules are the `artspace` binary's
//! terminal host, config, logging and CLI.

pub mod carousel;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod demo;
pub mod events;
pub mod logging;
pub mod startup;
pub mod theme;
pub mod tui;
pub mod util;
