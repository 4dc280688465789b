//! 원격 스케줄 서비스가 없을 때 쓰는 관 두께 표.
//!
//! ASTM/ASME 스케줄, SABS 719 ERW 두께(WTn), SABS 62 ERW Medium/Heavy 세 가지다.

use super::{PipeScheduleEntry, ScheduleTable};

type Rows = &'static [(u32, &'static [(&'static str, f64)])];

const SMALL: [&str; 4] = ["Sch 40/STD", "Sch 80/XS", "Sch 160", "XXS"];
const MID: [&str; 5] = ["Sch 40/STD", "Sch 80/XS", "Sch 120", "Sch 160", "XXS"];

const SMALL_BORE_WALLS: &[(u32, [f64; 4])] = &[
    (15, [2.77, 3.73, 4.78, 7.47]),
    (20, [2.87, 3.91, 5.56, 7.82]),
    (25, [3.38, 4.55, 6.35, 9.09]),
    (32, [3.56, 4.85, 6.35, 9.7]),
    (40, [3.68, 5.08, 7.14, 10.15]),
    (50, [3.91, 5.54, 8.74, 11.07]),
    (65, [5.16, 7.01, 9.53, 14.02]),
    (80, [5.49, 7.62, 11.13, 15.24]),
];

const MID_BORE_WALLS: &[(u32, [f64; 5])] = &[
    (100, [6.02, 8.56, 11.13, 13.49, 17.12]),
    (125, [6.55, 9.52, 12.7, 15.88, 19.05]),
    (150, [7.11, 10.97, 14.27, 18.26, 21.95]),
];

const LARGE_BORE: Rows = &[
    (
        200,
        &[
            ("Sch 20", 6.35),
            ("Sch 30", 7.04),
            ("Sch 40/STD", 8.18),
            ("Sch 60", 10.31),
            ("Sch 80/XS", 12.7),
            ("Sch 100", 15.09),
            ("Sch 120", 18.26),
            ("Sch 140", 20.62),
            ("XXS", 22.23),
            ("Sch 160", 23.01),
        ],
    ),
    (
        250,
        &[
            ("Sch 20", 6.35),
            ("Sch 30", 7.8),
            ("Sch 40/STD", 9.27),
            ("Sch 60/XS", 12.7),
            ("Sch 80", 15.09),
            ("Sch 100", 18.26),
            ("Sch 120", 21.44),
            ("Sch 140/XXS", 25.4),
            ("Sch 160", 28.58),
        ],
    ),
    (
        300,
        &[
            ("Sch 20", 6.35),
            ("Sch 30", 8.38),
            ("STD", 9.52),
            ("Sch 40", 10.31),
            ("XS", 12.7),
            ("Sch 60", 14.27),
            ("Sch 80", 17.48),
            ("Sch 100", 21.44),
            ("Sch 120/XXS", 25.4),
            ("Sch 140", 28.58),
            ("Sch 160", 33.32),
        ],
    ),
    (
        350,
        &[
            ("Sch 10", 6.35),
            ("Sch 20", 7.92),
            ("Sch 30/STD", 9.52),
            ("Sch 40", 11.13),
            ("XS", 12.7),
            ("Sch 60", 15.09),
            ("Sch 80", 19.05),
            ("Sch 100", 23.82),
            ("Sch 120", 27.79),
            ("Sch 140", 31.75),
            ("Sch 160", 35.71),
        ],
    ),
    (
        400,
        &[
            ("Sch 10", 6.35),
            ("Sch 20", 7.92),
            ("Sch 30/STD", 9.52),
            ("Sch 40/XS", 12.7),
            ("Sch 60", 16.66),
            ("Sch 80", 21.44),
            ("Sch 100", 26.19),
            ("Sch 120", 30.96),
            ("Sch 140", 36.52),
            ("Sch 160", 40.49),
        ],
    ),
    (
        450,
        &[
            ("Sch 10", 6.35),
            ("Sch 20", 7.92),
            ("STD", 9.52),
            ("Sch 30", 11.13),
            ("XS", 12.7),
            ("Sch 40", 14.27),
            ("Sch 60", 19.05),
            ("Sch 80", 23.83),
            ("Sch 100", 29.36),
            ("Sch 120", 34.92),
            ("Sch 140", 39.69),
            ("Sch 160", 45.24),
        ],
    ),
    (
        500,
        &[
            ("Sch 10", 6.35),
            ("Sch 20/STD", 9.52),
            ("Sch 30/XS", 12.7),
            ("Sch 40", 15.09),
            ("Sch 60", 20.63),
            ("Sch 80", 26.19),
            ("Sch 100", 32.54),
            ("Sch 120", 38.1),
            ("Sch 140", 44.45),
            ("Sch 160", 50.01),
        ],
    ),
    (
        600,
        &[
            ("Sch 10", 6.35),
            ("Sch 20/STD", 9.52),
            ("XS", 12.7),
            ("Sch 30", 14.27),
            ("Sch 40", 17.48),
            ("Sch 60", 24.61),
            ("Sch 80", 30.96),
            ("Sch 100", 38.89),
            ("Sch 120", 46.02),
            ("Sch 140", 52.39),
            ("Sch 160", 59.34),
        ],
    ),
    (
        700,
        &[
            ("Sch 10", 7.92),
            ("STD", 9.52),
            ("XS", 12.7),
            ("Sch 20", 12.7),
            ("Sch 30", 15.88),
            ("Sch 40", 19.05),
            ("Sch 60", 28.58),
        ],
    ),
    (
        750,
        &[
            ("Sch 10", 7.92),
            ("STD", 9.52),
            ("XS", 12.7),
            ("Sch 20", 12.7),
            ("Sch 30", 15.88),
            ("Sch 40", 20.62),
            ("Sch 60", 31.75),
        ],
    ),
    (
        800,
        &[
            ("Sch 10", 7.92),
            ("STD", 9.52),
            ("XS", 12.7),
            ("Sch 20", 12.7),
            ("Sch 30", 15.88),
            ("Sch 40", 22.22),
            ("Sch 60", 34.92),
        ],
    ),
    (
        900,
        &[
            ("Sch 10", 9.52),
            ("STD", 9.52),
            ("XS", 12.7),
            ("Sch 20", 12.7),
            ("Sch 30", 15.88),
            ("Sch 40", 25.4),
            ("Sch 60", 38.1),
        ],
    ),
    (
        1000,
        &[
            ("Sch 10", 9.52),
            ("STD", 9.52),
            ("XS", 12.7),
            ("Sch 20", 12.7),
            ("Sch 30", 16.66),
            ("Sch 40", 26.19),
            ("Sch 60", 40.49),
        ],
    ),
    (
        1050,
        &[
            ("Sch 10", 9.52),
            ("STD", 9.52),
            ("XS", 12.7),
            ("Sch 20", 12.7),
            ("Sch 30", 16.66),
            ("Sch 40", 27.79),
        ],
    ),
    (
        1200,
        &[
            ("Sch 10", 9.52),
            ("STD", 9.52),
            ("XS", 12.7),
            ("Sch 20", 14.27),
            ("Sch 30", 17.48),
            ("Sch 40", 31.75),
        ],
    ),
];

fn entries(nb: u32, rows: impl IntoIterator<Item = (&'static str, f64)>) -> Vec<PipeScheduleEntry> {
    rows.into_iter()
        .map(|(designation, wall)| PipeScheduleEntry::new(nb, designation, wall))
        .collect()
}

pub fn astm_schedules() -> ScheduleTable {
    let small = SMALL_BORE_WALLS
        .iter()
        .map(|(nb, walls)| (*nb, entries(*nb, SMALL.into_iter().zip(walls.iter().copied()))));
    let mid = MID_BORE_WALLS
        .iter()
        .map(|(nb, walls)| (*nb, entries(*nb, MID.into_iter().zip(walls.iter().copied()))));
    let large = LARGE_BORE
        .iter()
        .map(|(nb, rows)| (*nb, entries(*nb, rows.iter().copied())));
    small.chain(mid).chain(large).collect()
}

const WT_6_TO_16: [f64; 6] = [6.0, 8.0, 10.0, 12.0, 14.0, 16.0];

fn wall_designation(wall: f64) -> String {
    if wall.fract() == 0.0 {
        format!("WT{wall:.0}")
    } else {
        format!("WT{wall}")
    }
}

fn wt_entries(nb: u32, walls: &[f64]) -> Vec<PipeScheduleEntry> {
    walls
        .iter()
        .map(|wall| PipeScheduleEntry::new(nb, wall_designation(*wall), *wall))
        .collect()
}

/// SABS 719 ERW 두께 옵션(200~900 NB).
pub fn sabs719_schedules() -> ScheduleTable {
    let mut table = ScheduleTable::new();
    table.insert(200, wt_entries(200, &[4.5, 6.0, 8.0, 10.0, 12.0]));
    table.insert(250, wt_entries(250, &[4.5, 6.0, 8.0, 10.0, 12.0, 14.0]));
    table.insert(300, wt_entries(300, &WT_6_TO_16));
    table.insert(350, wt_entries(350, &WT_6_TO_16));

    let with_thin: Vec<f64> = std::iter::once(4.5).chain(WT_6_TO_16).collect();
    table.insert(400, wt_entries(400, &with_thin));
    let mut with_20 = with_thin.clone();
    with_20.push(20.0);
    table.insert(450, wt_entries(450, &with_20));

    let mut from_6_to_20: Vec<f64> = WT_6_TO_16.to_vec();
    from_6_to_20.push(20.0);
    table.insert(500, wt_entries(500, &from_6_to_20));

    let mut from_6_to_22 = from_6_to_20.clone();
    from_6_to_22.push(22.0);
    for nb in (550..=850).step_by(50) {
        table.insert(nb, wt_entries(nb, &from_6_to_22));
    }
    table.insert(900, wt_entries(900, &from_6_to_22[1..]));
    table
}

const SABS62_BORES: [u32; 11] = [15, 20, 25, 32, 40, 50, 65, 80, 100, 125, 150];
const SABS62_MEDIUM_WALLS: [f64; 11] = [2.3, 2.3, 2.8, 2.8, 2.8, 3.2, 3.2, 3.5, 3.9, 4.2, 4.2];
const SABS62_HEAVY_WALLS: [f64; 11] = [2.8, 2.8, 3.5, 3.5, 3.5, 3.9, 3.9, 4.2, 4.7, 4.7, 4.7];

fn single_grade(designation: &'static str, walls: &[f64; 11]) -> ScheduleTable {
    SABS62_BORES
        .iter()
        .zip(walls.iter())
        .map(|(nb, wall)| (*nb, vec![PipeScheduleEntry::new(*nb, designation, *wall)]))
        .collect()
}

pub fn sabs62_medium() -> ScheduleTable {
    single_grade("Medium", &SABS62_MEDIUM_WALLS)
}

pub fn sabs62_heavy() -> ScheduleTable {
    single_grade("Heavy", &SABS62_HEAVY_WALLS)
}
