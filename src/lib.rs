//! Client library for the Personal Tech Radar service.
//!
//! This crate owns the client side of the radar application: the bearer
//! session lifecycle, the REST plumbing for technologies, news sources, and
//! technology discoveries, and the deterministic geometry that places radar
//! blips on the quadrant/ring plot. Rendering (SVG/canvas painting) and the
//! backend itself are external collaborators; this crate talks to the backend
//! over HTTP and hands coordinate data to whatever paints it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`client`] | [`client::RadarClient`], the composition root wiring config, session, and API |
//! | [`session`] | Session state machine: login, logout, validation, change subscription |
//! | [`token_store`] | Durable storage for the single persisted bearer token |
//! | [`api`] | REST client for the radar backend (auth, technologies, news sources, discoveries) |
//! | [`radar`] | Plot geometry: quadrant/ring grid, blip placement, spider-chart axes |
//! | [`config`] | Typed client configuration from environment variables |

pub mod api;
pub mod client;
pub mod config;
pub mod radar;
pub mod session;
pub mod token_store;
