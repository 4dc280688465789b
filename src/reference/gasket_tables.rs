//! 가스켓 재질별 중량표.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 가스켓 재질 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GasketMaterial {
    SpiralWound,
    Rtj,
    Ptfe,
    Graphite,
    Caf,
    Rubber,
}

impl GasketMaterial {
    pub fn label(self) -> &'static str {
        match self {
            GasketMaterial::SpiralWound => "Spiral Wound",
            GasketMaterial::Rtj => "RTJ",
            GasketMaterial::Ptfe => "PTFE",
            GasketMaterial::Graphite => "Graphite",
            GasketMaterial::Caf => "CAF",
            GasketMaterial::Rubber => "Rubber",
        }
    }
}

impl fmt::Display for GasketMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 한 호칭경에서 재질별 가스켓 1매 중량(kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasketWeights {
    pub spiral_wound: f64,
    pub rtj: f64,
    pub ptfe: f64,
    pub graphite: f64,
    pub caf: f64,
    pub rubber: f64,
}

impl GasketWeights {
    pub fn weight(&self, material: GasketMaterial) -> f64 {
        match material {
            GasketMaterial::SpiralWound => self.spiral_wound,
            GasketMaterial::Rtj => self.rtj,
            GasketMaterial::Ptfe => self.ptfe,
            GasketMaterial::Graphite => self.graphite,
            GasketMaterial::Caf => self.caf,
            GasketMaterial::Rubber => self.rubber,
        }
    }
}

const fn gw(spiral_wound: f64, rtj: f64, ptfe: f64, graphite: f64, caf: f64, rubber: f64) -> GasketWeights {
    GasketWeights {
        spiral_wound,
        rtj,
        ptfe,
        graphite,
        caf,
        rubber,
    }
}

const GASKETS: &[(u32, GasketWeights)] = &[
    (15, gw(0.025, 0.045, 0.003, 0.002, 0.004, 0.003)),
    (20, gw(0.030, 0.055, 0.004, 0.003, 0.005, 0.004)),
    (25, gw(0.035, 0.065, 0.005, 0.004, 0.007, 0.005)),
    (32, gw(0.045, 0.080, 0.007, 0.005, 0.009, 0.006)),
    (40, gw(0.055, 0.095, 0.009, 0.007, 0.012, 0.008)),
    (50, gw(0.070, 0.120, 0.013, 0.010, 0.017, 0.011)),
    (65, gw(0.090, 0.150, 0.018, 0.014, 0.023, 0.015)),
    (80, gw(0.110, 0.180, 0.024, 0.018, 0.031, 0.020)),
    (100, gw(0.150, 0.250, 0.035, 0.027, 0.045, 0.030)),
    (125, gw(0.200, 0.320, 0.050, 0.038, 0.064, 0.042)),
    (150, gw(0.260, 0.400, 0.068, 0.052, 0.087, 0.057)),
    (200, gw(0.400, 0.600, 0.110, 0.085, 0.140, 0.092)),
    (250, gw(0.550, 0.850, 0.165, 0.127, 0.210, 0.138)),
    (300, gw(0.720, 1.100, 0.220, 0.170, 0.285, 0.187)),
    (350, gw(0.900, 1.400, 0.290, 0.225, 0.375, 0.245)),
    (400, gw(1.100, 1.700, 0.370, 0.285, 0.475, 0.310)),
    (450, gw(1.350, 2.000, 0.460, 0.355, 0.590, 0.385)),
    (500, gw(1.600, 2.400, 0.560, 0.430, 0.720, 0.470)),
    (600, gw(2.200, 3.300, 0.780, 0.600, 1.000, 0.655)),
    (700, gw(2.900, 4.300, 1.050, 0.810, 1.350, 0.880)),
    (800, gw(3.700, 5.500, 1.350, 1.040, 1.730, 1.130)),
    (900, gw(4.600, 6.900, 1.700, 1.310, 2.180, 1.420)),
    (1000, gw(5.600, 8.400, 2.100, 1.620, 2.700, 1.760)),
    (1200, gw(7.900, 11.800, 3.000, 2.310, 3.850, 2.510)),
];

pub fn gasket_weights() -> BTreeMap<u32, GasketWeights> {
    super::by_nb(GASKETS)
}
