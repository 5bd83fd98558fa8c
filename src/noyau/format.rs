// src/noyau/format.rs

use num_rational::BigRational;
use num_traits::One;

/* ------------------------ Helpers numériques ------------------------ */

/// 11 -> "11", 0.5 -> "0.5", 1/0 -> "inf".
pub fn format_f64(x: f64) -> String {
    format!("{x}")
}

/// n/1 -> "n" ; sinon "n/d" (dénominateur toujours positif).
pub fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}
