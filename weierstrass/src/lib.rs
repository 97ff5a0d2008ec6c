#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

pub mod curve;
pub mod ecdsa;
pub mod keys;

mod affine;
mod arithmetic;
mod error;
mod point;
mod signature;

pub use crate::{
    affine::AffinePoint,
    curve::Curve,
    error::{Error, Result},
    point::{
        Point, curve_equal, point_add, point_double, point_equal, point_in_curve, point_mul,
        point_negate, point_sub, shamirs_trick,
    },
    signature::Signature,
};
pub use bignum::{self, BigInt, RandomSource};
