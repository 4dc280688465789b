//! 플랜지 중량, 볼트 홀 수, BNW(볼트/너트/와셔) 세트, 맹플랜지 중량.

use std::collections::BTreeMap;

use super::dimensions::{BLANK_FLANGE_BORES_MM, NOMINAL_BORES_MM};
use super::{zip_nb, BoltSpec, ClassTable};
use crate::piping::pressure_class::PressureClass;

const PN10_WEIGHTS: [f64; 26] = [
    0.6, 0.8, 1.0, 1.3, 1.6, 2.0, 2.8, 3.6, 4.8, 6.8, 8.8, 12.8, 19.2, 28.0, 36.0, 44.0, 56.0,
    72.0, 96.0, 120.0, 136.0, 152.0, 192.0, 240.0, 280.0, 400.0,
];
const PN16_WEIGHTS: [f64; 26] = [
    0.8, 1.0, 1.2, 1.6, 2.0, 2.5, 3.5, 4.5, 6.0, 8.5, 11.0, 16.0, 24.0, 35.0, 45.0, 55.0, 70.0,
    90.0, 120.0, 150.0, 170.0, 190.0, 240.0, 300.0, 350.0, 500.0,
];
const PN25_WEIGHTS: [f64; 26] = [
    1.0, 1.3, 1.5, 2.0, 2.5, 3.2, 4.4, 5.6, 7.5, 10.6, 13.8, 20.0, 30.0, 43.8, 56.3, 68.8, 87.5,
    112.5, 150.0, 187.5, 212.5, 237.5, 300.0, 375.0, 437.5, 625.0,
];
const PN40_WEIGHTS: [f64; 26] = [
    1.2, 1.5, 1.8, 2.4, 3.0, 3.8, 5.3, 6.8, 9.0, 12.8, 16.5, 24.0, 36.0, 52.5, 67.5, 82.5, 105.0,
    135.0, 180.0, 225.0, 255.0, 285.0, 360.0, 450.0, 525.0, 750.0,
];
const PN64_WEIGHTS: [f64; 26] = [
    1.6, 2.0, 2.4, 3.2, 4.0, 5.0, 7.0, 9.0, 12.0, 17.0, 22.0, 32.0, 48.0, 70.0, 90.0, 110.0,
    140.0, 180.0, 240.0, 300.0, 340.0, 380.0, 480.0, 600.0, 700.0, 1000.0,
];
const CLASS600_WEIGHTS: [f64; 26] = [
    2.0, 2.5, 3.0, 4.0, 5.0, 6.3, 8.8, 11.3, 15.0, 21.3, 27.5, 40.0, 60.0, 87.5, 112.5, 137.5,
    175.0, 225.0, 300.0, 375.0, 425.0, 475.0, 600.0, 750.0, 875.0, 1250.0,
];

/// 플랜지 단품 중량. Class 150은 PN16, Class 300은 PN40과 같은 값을 쓴다.
pub fn flange_weights() -> ClassTable<f64> {
    [
        (PressureClass::Pn10, &PN10_WEIGHTS),
        (PressureClass::Pn16, &PN16_WEIGHTS),
        (PressureClass::Pn25, &PN25_WEIGHTS),
        (PressureClass::Pn40, &PN40_WEIGHTS),
        (PressureClass::Pn64, &PN64_WEIGHTS),
        (PressureClass::Class150, &PN16_WEIGHTS),
        (PressureClass::Class300, &PN40_WEIGHTS),
        (PressureClass::Class600, &CLASS600_WEIGHTS),
    ]
    .into_iter()
    .map(|(class, weights)| (class, zip_nb(&NOMINAL_BORES_MM, weights)))
    .collect()
}

// (시작 NB, 끝 NB, 홀 수). 750/1050은 볼트 홀 표에 없다.
const PN10_HOLES: &[(u32, u32, u32)] = &[
    (15, 65, 4),
    (80, 200, 8),
    (250, 300, 12),
    (350, 400, 16),
    (450, 600, 20),
    (700, 800, 24),
    (900, 1000, 28),
    (1200, 1200, 32),
];
const PN16_HOLES: &[(u32, u32, u32)] = &[
    (15, 65, 4),
    (80, 150, 8),
    (200, 300, 12),
    (350, 400, 16),
    (450, 600, 20),
    (700, 800, 24),
    (900, 1000, 28),
    (1200, 1200, 32),
];
const PN25_HOLES: &[(u32, u32, u32)] = &[
    (15, 50, 4),
    (65, 150, 8),
    (200, 250, 12),
    (300, 400, 16),
    (450, 600, 20),
];
const PN40_HOLES: &[(u32, u32, u32)] = &[
    (15, 50, 4),
    (65, 150, 8),
    (200, 250, 12),
    (300, 400, 16),
    (450, 500, 20),
];
const PN64_HOLES: &[(u32, u32, u32)] = &[
    (15, 40, 4),
    (50, 125, 8),
    (150, 200, 12),
    (250, 250, 16),
    (300, 400, 20),
    (450, 600, 24),
    (700, 700, 28),
    (800, 800, 32),
    (900, 1000, 36),
    (1200, 1200, 44),
];
const CLASS150_HOLES: &[(u32, u32, u32)] = &[
    (15, 80, 4),
    (100, 200, 8),
    (250, 350, 12),
    (400, 450, 16),
    (500, 600, 20),
    (700, 800, 28),
    (900, 900, 32),
    (1000, 1000, 36),
    (1200, 1200, 40),
];
const CLASS300_HOLES: &[(u32, u32, u32)] = &[
    (15, 40, 4),
    (50, 125, 8),
    (150, 200, 12),
    (250, 300, 16),
    (350, 400, 20),
    (450, 600, 24),
    (700, 800, 28),
    (900, 1200, 32),
];
const CLASS600_HOLES: &[(u32, u32, u32)] = &[
    (15, 40, 4),
    (50, 125, 8),
    (150, 150, 12),
    (200, 250, 16),
    (300, 450, 20),
    (500, 600, 24),
    (700, 700, 28),
];

fn expand_holes(ranges: &[(u32, u32, u32)]) -> BTreeMap<u32, u32> {
    NOMINAL_BORES_MM
        .iter()
        .copied()
        .filter(|nb| *nb != 750 && *nb != 1050)
        .filter_map(|nb| {
            ranges
                .iter()
                .find(|(lo, hi, _)| (*lo..=*hi).contains(&nb))
                .map(|(_, _, holes)| (nb, *holes))
        })
        .collect()
}

pub fn bolt_holes() -> ClassTable<u32> {
    [
        (PressureClass::Pn10, PN10_HOLES),
        (PressureClass::Pn16, PN16_HOLES),
        (PressureClass::Pn25, PN25_HOLES),
        (PressureClass::Pn40, PN40_HOLES),
        (PressureClass::Pn64, PN64_HOLES),
        (PressureClass::Class150, CLASS150_HOLES),
        (PressureClass::Class300, CLASS300_HOLES),
        (PressureClass::Class600, CLASS600_HOLES),
    ]
    .into_iter()
    .map(|(class, ranges)| (class, expand_holes(ranges)))
    .collect()
}

const PN10_BNW: &[(u32, &str, f64)] = &[
    (15, "M12x50", 0.056),
    (20, "M12x50", 0.056),
    (25, "M12x50", 0.056),
    (32, "M16x55", 0.113),
    (40, "M16x55", 0.113),
    (50, "M16x55", 0.113),
    (65, "M16x60", 0.123),
    (80, "M16x60", 0.123),
    (100, "M16x60", 0.123),
    (125, "M16x65", 0.131),
    (150, "M20x75", 0.244),
    (200, "M20x80", 0.256),
    (250, "M20x80", 0.256),
    (300, "M20x85", 0.268),
    (350, "M20x90", 0.28),
    (400, "M24x95", 0.436),
    (450, "M24x110", 0.487),
    (500, "M24x110", 0.487),
    (600, "M24x130", 0.554),
    (700, "M24x140", 0.588),
    (800, "M30x160", 1.092),
    (900, "M30x170", 1.146),
    (1000, "M30x180", 1.201),
    (1200, "M36x210", 2.027),
];
const PN16_BNW: &[(u32, &str, f64)] = &[
    (15, "M12x60", 0.067),
    (20, "M12x65", 0.071),
    (25, "M12x65", 0.071),
    (32, "M16x70", 0.138),
    (40, "M16x70", 0.138),
    (50, "M16x75", 0.146),
    (65, "M16x75", 0.146),
    (80, "M16x75", 0.146),
    (100, "M16x75", 0.146),
    (125, "M16x80", 0.153),
    (150, "M20x85", 0.268),
    (200, "M20x90", 0.28),
    (250, "M24x100", 0.453),
    (300, "M24x110", 0.487),
    (350, "M24x110", 0.487),
    (400, "M27x130", 0.73),
    (450, "M27x130", 0.73),
    (500, "M30x150", 1.038),
    (600, "M33x170", 1.416),
    (700, "M33x180", 1.482),
    (800, "M36x200", 1.961),
    (900, "M36x210", 2.027),
    (1000, "M39x230", 2.624),
    (1200, "M45x270", 4.095),
];
const PN25_BNW: &[(u32, &str, f64)] = &[
    (15, "M12x60", 0.067),
    (20, "M12x60", 0.067),
    (25, "M12x65", 0.071),
    (32, "M16x75", 0.146),
    (40, "M16x75", 0.146),
    (50, "M16x75", 0.146),
    (65, "M16x80", 0.153),
    (80, "M16x80", 0.153),
    (100, "M20x90", 0.28),
    (125, "M24x110", 0.487),
    (150, "M24x110", 0.487),
    (200, "M24x110", 0.487),
    (250, "M24x110", 0.487),
    (300, "M24x110", 0.487),
    (350, "M30x130", 0.929),
    (400, "M30x140", 0.984),
    (450, "M30x150", 1.038),
    (500, "M30x160", 1.092),
    (600, "M36x190", 1.882),
];
const PN40_BNW: &[(u32, &str, f64)] = &[
    (15, "M12x60", 0.067),
    (20, "M12x60", 0.067),
    (25, "M12x65", 0.071),
    (32, "M16x75", 0.146),
    (40, "M16x75", 0.146),
    (50, "M16x75", 0.146),
    (65, "M16x80", 0.153),
    (80, "M16x80", 0.153),
    (100, "M20x90", 0.28),
    (125, "M24x110", 0.487),
    (150, "M24x110", 0.487),
    (200, "M24x110", 0.487),
    (250, "M30x140", 0.984),
    (300, "M30x140", 0.984),
    (350, "M30x150", 1.038),
    (400, "M36x170", 1.725),
    (450, "M36x190", 1.882),
    (500, "M36x210", 2.027),
];
const PN64_BNW: &[(u32, &str, f64)] = &[
    (15, "M16x65", 0.18),
    (20, "M16x70", 0.20),
    (25, "M16x75", 0.22),
    (32, "M20x80", 0.35),
    (40, "M20x85", 0.38),
    (50, "M20x90", 0.40),
    (65, "M24x95", 0.55),
    (80, "M24x100", 0.58),
    (100, "M27x110", 0.80),
    (125, "M30x120", 1.08),
    (150, "M33x130", 1.40),
    (200, "M36x150", 1.90),
    (250, "M39x170", 2.50),
    (300, "M42x190", 3.20),
    (350, "M45x210", 3.90),
    (400, "M48x230", 4.70),
    (450, "M52x250", 5.75),
    (500, "M56x275", 7.00),
    (600, "M60x305", 8.60),
    (700, "M64x340", 10.50),
    (800, "M72x385", 14.00),
    (900, "M76x425", 16.50),
    (1000, "M80x470", 19.50),
    (1200, "M90x560", 27.00),
];
const CLASS150_BNW: &[(u32, &str, f64)] = &[
    (15, "1/2\"x55", 0.061),
    (20, "1/2\"x60", 0.067),
    (25, "1/2\"x60", 0.067),
    (32, "1/2\"x65", 0.071),
    (40, "1/2\"x65", 0.071),
    (50, "5/8\"x75", 0.146),
    (65, "5/8\"x80", 0.153),
    (80, "5/8\"x85", 0.161),
    (100, "5/8\"x85", 0.161),
    (125, "3/4\"x90", 0.28),
    (150, "3/4\"x95", 0.292),
    (200, "3/4\"x100", 0.304),
    (250, "7/8\"x110", 0.399),
    (300, "7/8\"x110", 0.399),
    (350, "1\"x120", 0.522),
    (400, "1\"x120", 0.522),
    (450, "1 1/8\"x130", 0.73),
    (500, "1 1/8\"x140", 0.774),
    (600, "1 1/4\"x160", 1.092),
    (700, "1 1/4\"x200", 1.309),
    (800, "1 1/2\"x230", 2.184),
    (900, "1 1/2\"x250", 2.34),
    (1000, "1 1/2\"x250", 2.34),
    (1200, "1 1/2\"x270", 2.497),
];
const CLASS300_BNW: &[(u32, &str, f64)] = &[
    (15, "1/2\"x60", 0.067),
    (20, "5/8\"x70", 0.138),
    (25, "5/8\"x70", 0.138),
    (32, "5/8\"x75", 0.146),
    (40, "3/4\"x85", 0.268),
    (50, "5/8\"x80", 0.153),
    (65, "3/4\"x95", 0.292),
    (80, "3/4\"x100", 0.304),
    (100, "3/4\"x110", 0.328),
    (125, "3/4\"x110", 0.328),
    (150, "3/4\"x120", 0.352),
    (200, "7/8\"x130", 0.455),
    (250, "1\"x150", 0.623),
    (300, "1 1/8\"x160", 0.862),
    (350, "1 1/8\"x160", 0.862),
    (400, "1 1/4\"x170", 1.146),
    (450, "1 1/4\"x180", 1.201),
    (500, "1 1/4\"x190", 1.255),
    (600, "1 1/2\"x210", 2.027),
    (700, "1 5/8\"x250", 2.809),
    (800, "1 7/8\"x280", 4.218),
    (900, "2\"x300", 5.149),
    (1000, "1 5/8\"x300", 3.27),
    (1200, "1 3/4\"x330", 2.55),
];
const CLASS600_BNW: &[(u32, &str, f64)] = &[
    (15, "1/2\"x75", 0.079),
    (20, "5/8\"x80", 0.153),
    (25, "5/8\"x85", 0.161),
    (32, "5/8\"x90", 0.169),
    (40, "3/4\"x100", 0.304),
    (50, "5/8\"x100", 0.184),
    (65, "3/4\"x110", 0.328),
    (80, "3/4\"x120", 0.352),
    (100, "7/8\"x130", 0.455),
    (125, "1\"x150", 0.623),
    (150, "1\"x160", 0.657),
    (200, "1 1/8\"x180", 0.95),
    (250, "1 1/4\"x200", 1.309),
    (300, "1 1/4\"x210", 1.355),
    (400, "1 1/2\"x230", 2.184),
    (450, "1 5/8\"x250", 2.809),
    (500, "1 5/8\"x270", 2.993),
    (600, "1 7/8\"x300", 4.464),
    (700, "2\"x330", 5.569),
];

fn bolt_rows(rows: &[(u32, &str, f64)]) -> BTreeMap<u32, BoltSpec> {
    rows.iter()
        .map(|(nb, size, weight)| (*nb, BoltSpec::new(*size, *weight)))
        .collect()
}

/// 등급별 볼트 사양. ASME 등급은 인치 볼트 표기를 쓴다.
pub fn bnw_sets() -> ClassTable<BoltSpec> {
    [
        (PressureClass::Pn10, PN10_BNW),
        (PressureClass::Pn16, PN16_BNW),
        (PressureClass::Pn25, PN25_BNW),
        (PressureClass::Pn40, PN40_BNW),
        (PressureClass::Pn64, PN64_BNW),
        (PressureClass::Class150, CLASS150_BNW),
        (PressureClass::Class300, CLASS300_BNW),
        (PressureClass::Class600, CLASS600_BNW),
    ]
    .into_iter()
    .map(|(class, rows)| (class, bolt_rows(rows)))
    .collect()
}

const BLANK_PN10: [f64; 18] = [
    2.5, 3.5, 4.5, 6.0, 8.5, 11.0, 16.5, 25.0, 36.0, 46.0, 58.0, 72.0, 90.0, 120.0, 155.0, 175.0,
    200.0, 250.0,
];
const BLANK_PN16: [f64; 18] = [
    3.0, 4.2, 5.4, 7.2, 10.2, 13.2, 19.8, 30.0, 43.2, 55.2, 69.6, 86.4, 108.0, 144.0, 186.0,
    210.0, 240.0, 300.0,
];
const BLANK_PN25: [f64; 18] = [
    4.0, 5.6, 7.2, 9.6, 13.6, 17.6, 26.4, 40.0, 57.6, 73.6, 92.8, 115.2, 144.0, 192.0, 248.0,
    280.0, 320.0, 400.0,
];
const BLANK_PN40: [f64; 18] = [
    5.5, 7.7, 9.9, 13.2, 18.7, 24.2, 36.3, 55.0, 79.2, 101.2, 127.6, 158.4, 198.0, 264.0, 341.0,
    385.0, 440.0, 550.0,
];

/// 맹플랜지 중량. PN10/16/25/40 네 등급만 있다.
pub fn blank_flange_weights() -> ClassTable<f64> {
    [
        (PressureClass::Pn10, &BLANK_PN10),
        (PressureClass::Pn16, &BLANK_PN16),
        (PressureClass::Pn25, &BLANK_PN25),
        (PressureClass::Pn40, &BLANK_PN40),
    ]
    .into_iter()
    .map(|(class, weights)| (class, zip_nb(&BLANK_FLANGE_BORES_MM, weights)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_table_skips_unlisted_sizes() {
        let holes = bolt_holes();
        let pn16 = &holes[&PressureClass::Pn16];
        assert_eq!(pn16.get(&200), Some(&12));
        assert_eq!(holes[&PressureClass::Pn10].get(&200), Some(&8));
        assert_eq!(pn16.get(&750), None);
        assert_eq!(holes[&PressureClass::Pn40].get(&600), None);
    }

    #[test]
    fn class600_bolts_skip_350() {
        let sets = bnw_sets();
        let c600 = &sets[&PressureClass::Class600];
        assert!(c600.get(&350).is_none());
        assert_eq!(c600[&700].bolt_size, "2\"x330");
    }

    #[test]
    fn asme_weights_alias_pn_tables() {
        let w = flange_weights();
        assert_eq!(w[&PressureClass::Class150], w[&PressureClass::Pn16]);
        assert_eq!(w[&PressureClass::Class300], w[&PressureClass::Pn40]);
    }
}
