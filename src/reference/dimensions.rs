//! 관 외경과 플랜지 외경.

use std::collections::BTreeMap;

use super::zip_nb;

/// 표에 있는 26개 호칭경(mm).
pub const NOMINAL_BORES_MM: [u32; 26] = [
    15, 20, 25, 32, 40, 50, 65, 80, 100, 125, 150, 200, 250, 300, 350, 400, 450, 500, 600, 700,
    750, 800, 900, 1000, 1050, 1200,
];

const OUTSIDE_DIAMETERS_MM: [f64; 26] = [
    21.3, 26.7, 33.4, 42.2, 48.3, 60.3, 73.0, 88.9, 114.3, 139.7, 168.3, 219.1, 273.0, 323.9,
    355.6, 406.4, 457.2, 508.0, 609.6, 711.2, 762.0, 812.8, 914.4, 1016.0, 1066.8, 1219.2,
];

/// 맹플랜지 표가 다루는 호칭경.
pub const BLANK_FLANGE_BORES_MM: [u32; 18] = [
    50, 65, 80, 100, 125, 150, 200, 250, 300, 350, 400, 450, 500, 600, 700, 750, 800, 900,
];

const FLANGE_OUTSIDE_DIAMETERS_MM: [f64; 18] = [
    165.0, 185.0, 200.0, 220.0, 250.0, 285.0, 340.0, 395.0, 445.0, 505.0, 565.0, 615.0, 670.0,
    780.0, 885.0, 940.0, 1015.0, 1115.0,
];

pub fn outside_diameters() -> BTreeMap<u32, f64> {
    zip_nb(&NOMINAL_BORES_MM, &OUTSIDE_DIAMETERS_MM)
}

pub fn flange_outside_diameters() -> BTreeMap<u32, f64> {
    zip_nb(&BLANK_FLANGE_BORES_MM, &FLANGE_OUTSIDE_DIAMETERS_MM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diameters_grow_with_bore() {
        let od = outside_diameters();
        let values: Vec<f64> = od.values().copied().collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!((od[&100] - 114.3).abs() < 1e-9);
    }
}
