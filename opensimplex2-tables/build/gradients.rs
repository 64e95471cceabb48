use std::fs;

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use serde::Deserialize;

/// Normalisation divisors applied to every raw gradient of a dimension.
#[derive(Deserialize)]
struct Normalization {
    n2: f64,
    n3: f64,
    n4: f64,
}

/// The raw gradient catalogue as extracted into `build_assets/gradients.json`.
#[derive(Deserialize)]
struct GradientsJson {
    normalization: Normalization,
    gradients_2d: Vec<[f64; 2]>,
    gradients_3d: Vec<[f64; 3]>,
    gradients_4d: Vec<[f64; 4]>,
}

const FIELDS: [&str; 4] = ["dx", "dy", "dz", "dw"];

/// Emit a normalised `[GradN; len]` static from raw rows.
fn gradient_static<const D: usize>(
    name: &str,
    ty: &str,
    doc: &str,
    rows: &[[f64; D]],
    divisor: f64,
) -> TokenStream {
    let name = Ident::new(name, Span::call_site());
    let ty = Ident::new(ty, Span::call_site());
    let len = rows.len();
    let fields: Vec<Ident> = FIELDS[..D]
        .iter()
        .map(|f| Ident::new(f, Span::call_site()))
        .collect();

    let entries = rows.iter().map(|row| {
        let values = row.iter().map(|v| v / divisor);
        let fields = fields.iter();
        quote! { #ty { #(#fields: #values),* } }
    });

    quote! {
        #[doc = #doc]
        pub static #name: [#ty; #len] = [#(#entries),*];
    }
}

/// Generate the normalised gradient catalogues for all three dimensions.
pub(crate) fn build() -> TokenStream {
    println!("cargo:rerun-if-changed=build_assets/gradients.json");

    let content = fs::read_to_string("build_assets/gradients.json")
        .expect("Failed to read build_assets/gradients.json");
    let json: GradientsJson =
        serde_json::from_str(&content).expect("Failed to parse gradients JSON");

    let Normalization { n2, n3, n4 } = json.normalization;

    let grad2 = gradient_static(
        "GRADIENT_VECTORS_2D",
        "Grad2",
        "Unit directions around the circle, divided by `N2`.",
        &json.gradients_2d,
        n2,
    );
    let grad3 = gradient_static(
        "GRADIENT_VECTORS_3D",
        "Grad3",
        "Directions of equal length spread over the sphere, divided by `N3`.",
        &json.gradients_3d,
        n3,
    );
    let grad4 = gradient_static(
        "GRADIENT_VECTORS_4D",
        "Grad4",
        "Unit directions spread over the 3-sphere, divided by `N4`.",
        &json.gradients_4d,
        n4,
    );

    quote! {
        /// Normalisation divisor for 2D gradients.
        pub const N2: f64 = #n2;
        /// Normalisation divisor for 3D gradients.
        pub const N3: f64 = #n3;
        /// Normalisation divisor for 4D gradients.
        pub const N4: f64 = #n4;

        #grad2
        #grad3
        #grad4
    }
}
