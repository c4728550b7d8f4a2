#![deny(
	absolute_paths_not_starting_with_crate,
	future_incompatible,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Base controller for panels: client-rendered regions driven by the JSON envelopes that `b2u.panel.js` understands.

pub mod action;
pub mod envelope;
pub mod error;
pub mod pagination;
pub mod params;
pub mod web;

pub use action::{Panel, PanelAction, ParameterSource, ResponseSink};
pub use envelope::{Args, ResponseEnvelope};
pub use error::Error;
pub use params::{reconcile_args, Parameters};
