//! 강관 규격별 운전 온도/압력 한계.
//!
//! 규격명에 패턴이 포함되면 일치로 본다. 같은 규격군에서 구체적인 등급을 먼저 선언해야
//! 일반 패턴보다 앞서 잡힌다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLimits {
    pub pattern: String,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    /// 참고용 상한. 실제 허용 압력은 두께에 따라 달라진다.
    pub max_pressure_bar: f64,
    pub material_type: String,
    pub notes: String,
    /// 내마모/구조용 강재. 압력 용도로 쓸 수 없다.
    pub not_for_pressure_service: bool,
}

impl MaterialLimits {
    pub fn contains_temperature(&self, temp_c: f64) -> bool {
        temp_c >= self.min_temp_c && temp_c <= self.max_temp_c
    }
}

fn pressure(
    pattern: &str,
    min_temp_c: f64,
    max_temp_c: f64,
    max_pressure_bar: f64,
    material_type: &str,
    notes: &str,
) -> MaterialLimits {
    MaterialLimits {
        pattern: pattern.to_string(),
        min_temp_c,
        max_temp_c,
        max_pressure_bar,
        material_type: material_type.to_string(),
        notes: notes.to_string(),
        not_for_pressure_service: false,
    }
}

fn wear_only(
    pattern: &str,
    min_temp_c: f64,
    max_temp_c: f64,
    max_pressure_bar: f64,
    material_type: &str,
    notes: &str,
) -> MaterialLimits {
    MaterialLimits {
        not_for_pressure_service: true,
        ..pressure(pattern, min_temp_c, max_temp_c, max_pressure_bar, material_type, notes)
    }
}

/// 선언 순서가 곧 우선순위다.
#[rustfmt::skip]
pub fn material_limits() -> Vec<MaterialLimits> {
    vec![
        pressure("SABS 62 Medium", -20.0, 300.0, 25.0, "Carbon Steel ERW", "General purpose ERW pipe (medium grade). Pressure derated above 100°C: 25 bar at ambient, ~20 bar at 200°C, ~15 bar at 300°C."),
        pressure("SABS 62 Heavy", -20.0, 300.0, 35.0, "Carbon Steel ERW", "General purpose ERW pipe (heavy grade). Pressure derated above 100°C: 35 bar at ambient, ~28 bar at 200°C, ~21 bar at 300°C."),
        pressure("SABS 62", -20.0, 300.0, 25.0, "Carbon Steel ERW", "General purpose ERW pipe. For pressure service, specify Medium or Heavy grade. Not recommended above 300°C."),
        pressure("SABS 719", -20.0, 300.0, 16.0, "Carbon Steel ERW", "Large bore ERW pipe for aqueous fluids. Working pressure 16 bar at ambient (per SANS 719). Derated above 100°C."),
        pressure("ASTM A106 Gr. A", -29.0, 427.0, 400.0, "Carbon Steel Seamless", "High temperature seamless pipe"),
        pressure("ASTM A106 Gr. B", -29.0, 427.0, 400.0, "Carbon Steel Seamless", "High temperature seamless pipe"),
        pressure("ASTM A106 Gr. C", -29.0, 427.0, 400.0, "Carbon Steel Seamless", "High temperature seamless pipe (higher strength)"),
        pressure("ASTM A106", -29.0, 427.0, 400.0, "Carbon Steel Seamless", "High temperature seamless pipe"),
        pressure("ASTM A53 Gr. A", -29.0, 400.0, 250.0, "Carbon Steel", "General purpose pipe"),
        pressure("ASTM A53 Gr. B", -29.0, 400.0, 250.0, "Carbon Steel", "General purpose pipe"),
        pressure("ASTM A53", -29.0, 400.0, 250.0, "Carbon Steel", "General purpose pipe - seamless or welded"),
        pressure("ASTM A333 Gr. 6", -100.0, 400.0, 250.0, "Low-Temp Carbon Steel", "For temperatures down to -46°C"),
        pressure("ASTM A333 Gr. 3", -100.0, 400.0, 250.0, "Low-Temp 3.5Ni Steel", "For temperatures down to -100°C"),
        pressure("ASTM A333 Gr. 8", -196.0, 400.0, 250.0, "Cryogenic 9Ni Steel", "For cryogenic service down to -196°C"),
        pressure("ASTM A333", -100.0, 400.0, 250.0, "Low-Temp Carbon Steel", "For temperatures down to -100°C"),
        pressure("API 5L Gr. B", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Oil and gas pipeline"),
        pressure("API 5L X52", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Higher strength pipeline"),
        pressure("API 5L X60", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "High strength pipeline"),
        pressure("API 5L", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Oil and gas pipeline"),
        pressure("ASTM A179", -29.0, 400.0, 160.0, "Heat Exchanger Tube", "Cold-drawn seamless"),
        pressure("ASTM A192", -29.0, 454.0, 250.0, "Boiler Tube", "High-pressure boiler service"),
        wear_only("ASTM A500 Gr. A", -29.0, 200.0, 0.0, "Structural Tubing", "NOT FOR PRESSURE SERVICE - Cold-formed welded structural tubing. Use for structural support only. Min yield 228 MPa (33 ksi)."),
        wear_only("ASTM A500 Gr. B", -29.0, 200.0, 0.0, "Structural Tubing", "NOT FOR PRESSURE SERVICE - Cold-formed welded structural tubing. Use for structural support only. Min yield 290 MPa (42 ksi)."),
        wear_only("ASTM A500 Gr. C", -29.0, 200.0, 0.0, "Structural Tubing", "NOT FOR PRESSURE SERVICE - Cold-formed welded structural tubing. Use for structural support only. Min yield 317 MPa (46 ksi)."),
        wear_only("ASTM A500", -29.0, 200.0, 0.0, "Structural Tubing", "NOT FOR PRESSURE SERVICE - Cold-formed welded structural tubing. Use for structural support only."),
        pressure("ASTM A335 P1", -29.0, 538.0, 400.0, "Alloy Steel 0.5Mo", "Elevated temperature service"),
        pressure("ASTM A335 P11", -29.0, 593.0, 400.0, "Alloy Steel 1.25Cr-0.5Mo", "High temperature service"),
        pressure("ASTM A335 P12", -29.0, 593.0, 400.0, "Alloy Steel 1Cr-0.5Mo", "High temperature service"),
        pressure("ASTM A335 P22", -29.0, 593.0, 400.0, "Alloy Steel 2.25Cr-1Mo", "High temperature service"),
        pressure("ASTM A335 P5", -29.0, 593.0, 400.0, "Alloy Steel 5Cr-0.5Mo", "High temperature service"),
        pressure("ASTM A335 P9", -29.0, 593.0, 400.0, "Alloy Steel 9Cr-1Mo", "High temperature service"),
        pressure("ASTM A335 P91", -29.0, 649.0, 400.0, "Alloy Steel 9Cr-1Mo-V", "Advanced high temperature service"),
        pressure("ASTM A335 P92", -29.0, 649.0, 400.0, "Alloy Steel 9Cr-2W", "Advanced high temperature service"),
        pressure("ASTM A335", -29.0, 593.0, 400.0, "Alloy Steel Chrome-Moly", "High temperature alloy"),
        pressure("ASTM A312 TP304", -196.0, 816.0, 400.0, "Stainless Steel 18Cr-8Ni", "General purpose austenitic"),
        pressure("ASTM A312 TP304L", -196.0, 816.0, 400.0, "Stainless Steel 18Cr-8Ni Low C", "Improved weldability"),
        pressure("ASTM A312 TP316", -196.0, 816.0, 400.0, "Stainless Steel 16Cr-12Ni-2Mo", "Improved corrosion resistance"),
        pressure("ASTM A312 TP316L", -196.0, 816.0, 400.0, "Stainless Steel 16Cr-12Ni-2Mo Low C", "Improved weldability + corrosion resistance"),
        pressure("ASTM A312 TP321", -196.0, 816.0, 400.0, "Stainless Steel 18Cr-10Ni-Ti", "Stabilized for high temperature"),
        pressure("ASTM A312 TP347", -196.0, 816.0, 400.0, "Stainless Steel 18Cr-10Ni-Nb", "Stabilized for high temperature"),
        pressure("ASTM A312 TP309S", -196.0, 1038.0, 400.0, "Stainless Steel 23Cr-12Ni", "High temperature oxidation resistance"),
        pressure("ASTM A312 TP310S", -196.0, 1093.0, 400.0, "Stainless Steel 25Cr-20Ni", "Highest temperature austenitic"),
        pressure("ASTM A312", -196.0, 816.0, 400.0, "Stainless Steel", "Austenitic stainless - wide temp range"),
        pressure("ASTM A358", -196.0, 816.0, 400.0, "Stainless Steel Welded", "Electric-fusion welded stainless"),
        wear_only("AR400", -40.0, 200.0, 0.0, "Abrasion-Resistant Steel", "NOT FOR PRESSURE SERVICE - Wear liner applications only. Hardness-rated steel that softens above 200°C. Requires specific engineering analysis for any pressure containment."),
        wear_only("AR450", -40.0, 200.0, 0.0, "Abrasion-Resistant Steel", "NOT FOR PRESSURE SERVICE - Wear liner applications only. Hardness-rated steel that softens above 200°C. Requires specific engineering analysis for any pressure containment."),
        wear_only("AR500", -40.0, 200.0, 0.0, "Abrasion-Resistant Steel", "NOT FOR PRESSURE SERVICE - Wear liner applications only. Hardness-rated steel that softens above 200°C. More brittle than AR400/AR450. Requires specific engineering analysis for any pressure containment."),
        wear_only("Hardox", -40.0, 200.0, 0.0, "Abrasion-Resistant Steel", "NOT FOR PRESSURE SERVICE - Wear liner applications only. Hardness-rated steel that softens above 200°C."),
        pressure("API 5L X42", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Pipeline grade - 42,000 psi min yield strength"),
        pressure("API 5L X46", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Pipeline grade - 46,000 psi min yield strength"),
        pressure("API 5L X56", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Pipeline grade - 56,000 psi min yield strength"),
        pressure("API 5L X65", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "High strength pipeline - 65,000 psi min yield strength"),
        pressure("API 5L X70", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "High strength pipeline - 70,000 psi min yield strength"),
        pressure("API 5L X80", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Ultra-high strength pipeline - 80,000 psi min yield strength"),
        pressure("API 5L Gr. A", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Pipeline grade - lower strength, good weldability"),
        pressure("API 5L X90", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Ultra-high strength pipeline - 90,000 psi min yield strength. Requires special welding procedures."),
        pressure("API 5L X100", -29.0, 400.0, 250.0, "Line Pipe Carbon Steel", "Ultra-high strength pipeline - 100,000 psi min yield strength. Requires special welding procedures and preheat."),
        pressure("ASTM A333 Gr. 1", -45.0, 400.0, 250.0, "Low-Temp Carbon Steel", "Killed carbon steel for temperatures down to -45°C"),
        pressure("ASTM A333 Gr. 4", -100.0, 400.0, 250.0, "Low-Temp 0.75Ni Steel", "0.75% Nickel alloy for temperatures down to -100°C"),
        pressure("ASTM A333 Gr. 7", -100.0, 400.0, 250.0, "Low-Temp 2.5Ni Steel", "2.5% Nickel alloy for temperatures down to -100°C"),
        pressure("ASTM A790 S31803", -50.0, 315.0, 400.0, "Duplex Stainless Steel", "Duplex 2205 (UNS S31803) - 22Cr-5Ni-3Mo. Excellent chloride stress corrosion resistance. Max temp limited by sigma phase formation."),
        pressure("ASTM A790 S32205", -50.0, 315.0, 400.0, "Duplex Stainless Steel", "Duplex 2205 (UNS S32205) - 22Cr-5Ni-3Mo. Improved version of S31803 with tighter composition. Max temp limited by sigma phase formation."),
        pressure("ASTM A790 S32750", -50.0, 315.0, 400.0, "Super Duplex Stainless Steel", "Super Duplex 2507 (25Cr-7Ni-4Mo). Higher strength and corrosion resistance than standard duplex. Max temp 315°C due to sigma phase."),
        pressure("ASTM A790", -50.0, 315.0, 400.0, "Duplex Stainless Steel", "Duplex stainless steel pipe. Superior corrosion resistance and strength vs austenitic. Max temp 315°C due to sigma phase."),
        pressure("ASTM A358 TP304", -196.0, 816.0, 400.0, "Stainless Steel Welded 18Cr-8Ni", "Electric-fusion welded 304 stainless steel pipe"),
        pressure("ASTM A358 TP304L", -196.0, 816.0, 400.0, "Stainless Steel Welded 18Cr-8Ni Low C", "Electric-fusion welded 304L stainless steel pipe - improved weldability"),
        pressure("ASTM A358 TP316", -196.0, 816.0, 400.0, "Stainless Steel Welded 16Cr-12Ni-2Mo", "Electric-fusion welded 316 stainless steel pipe - improved corrosion resistance"),
        pressure("ASTM A358 TP316L", -196.0, 816.0, 400.0, "Stainless Steel Welded 16Cr-12Ni-2Mo Low C", "Electric-fusion welded 316L stainless steel pipe - improved weldability + corrosion resistance"),
        pressure("EN 10216-1", -20.0, 300.0, 250.0, "European Seamless Steel", "EN seamless non-alloy steel for pressure purposes at room temperature"),
        pressure("EN 10216-2", -20.0, 550.0, 250.0, "European Seamless Alloy Steel", "EN seamless non-alloy and alloy steel for elevated temperature"),
        pressure("EN 10216", -20.0, 450.0, 250.0, "European Seamless Steel", "EN seamless steel tubes for pressure purposes"),
        pressure("EN 10217-1", -20.0, 300.0, 200.0, "European Welded Steel", "EN welded non-alloy steel for pressure purposes at room temperature"),
        pressure("EN 10217-2", -20.0, 550.0, 200.0, "European Welded Alloy Steel", "EN welded non-alloy and alloy steel for elevated temperature"),
        pressure("EN 10217", -20.0, 400.0, 200.0, "European Welded Steel", "EN welded steel tubes for pressure purposes"),
        pressure("EN 10255 Medium", -20.0, 300.0, 25.0, "European ERW Medium", "EN non-alloy steel tubes suitable for welding. Medium grade."),
        pressure("EN 10255 Heavy", -20.0, 300.0, 40.0, "European ERW Heavy", "EN non-alloy steel tubes suitable for welding. Heavy grade."),
        pressure("EN 10255", -20.0, 300.0, 25.0, "European ERW Steel", "EN non-alloy steel tubes suitable for welding - similar to SABS 62"),
        pressure("Incoloy 800", -196.0, 816.0, 400.0, "Nickel-Iron-Chromium Alloy", "High-temperature alloy (32Ni-21Cr-46Fe). Excellent oxidation and carburization resistance. Use for furnace parts, petrochemical equipment."),
        pressure("Incoloy 800H", -196.0, 900.0, 400.0, "Nickel-Iron-Chromium Alloy", "Solution-annealed variant with controlled carbon (0.06-0.10%) for improved high-temp creep and rupture properties. Max temp 900°C for long-term service."),
        pressure("Incoloy 800HT", -196.0, 900.0, 400.0, "Nickel-Iron-Chromium Alloy", "High-temp variant with Al+Ti for improved creep strength. Max temp 900°C for long-term service."),
        pressure("Incoloy", -196.0, 816.0, 400.0, "Nickel-Iron-Chromium Alloy", "High-temperature nickel-iron-chromium alloy. Specify grade (800, 800H, 800HT) for best results."),
        pressure("Titanium Gr. 2", -59.0, 316.0, 400.0, "Commercially Pure Titanium", "Unalloyed titanium with excellent corrosion resistance. Use for seawater, chloride environments. Max temp 316°C."),
        pressure("Titanium Gr. 5", -59.0, 316.0, 400.0, "Titanium Alloy Ti-6Al-4V", "High-strength titanium alloy (6% Al, 4% V). Use for high-stress, corrosion-resistant applications. Max temp 316°C."),
        pressure("Titanium Gr. 7", -59.0, 316.0, 400.0, "Titanium with Palladium", "Ti with 0.15% Pd for enhanced corrosion resistance in reducing acids. Max temp 316°C."),
        pressure("Titanium", -59.0, 316.0, 400.0, "Titanium", "Titanium pipe/tube. Specify grade (Gr. 2, Gr. 5, Gr. 7) for specific applications. Excellent corrosion resistance."),
        pressure("Inconel 625", -196.0, 982.0, 400.0, "Nickel-Chromium-Molybdenum Alloy", "High-strength nickel superalloy (58Ni-22Cr-9Mo). Excellent fatigue and corrosion resistance. Use for severe environments."),
        pressure("Inconel 600", -196.0, 871.0, 400.0, "Nickel-Chromium Alloy", "Nickel-chromium alloy (72Ni-15Cr). Good oxidation resistance at high temperatures. Use for furnaces, heat treatment equipment."),
        pressure("Inconel", -196.0, 871.0, 400.0, "Nickel Superalloy", "Nickel-chromium superalloy. Specify grade (600, 625, etc.) for specific applications."),
        pressure("Hastelloy C-276", -196.0, 677.0, 400.0, "Nickel-Molybdenum-Chromium Alloy", "Corrosion-resistant superalloy (57Ni-16Mo-16Cr). Excellent in reducing and oxidizing environments. Use for chemical processing."),
        pressure("Hastelloy", -196.0, 677.0, 400.0, "Nickel Superalloy", "Corrosion-resistant nickel superalloy. Specify grade (C-276, C-22, etc.) for specific applications."),
        pressure("Monel", -196.0, 538.0, 400.0, "Nickel-Copper Alloy", "Monel 400 (67Ni-30Cu). Excellent resistance to seawater and hydrofluoric acid. Max temp 538°C."),
        pressure("Monel 400", -196.0, 538.0, 400.0, "Nickel-Copper Alloy", "67Ni-30Cu alloy. Excellent resistance to seawater, hydrofluoric acid, and alkaline solutions. Max temp 538°C."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_grades_precede_generic_patterns() {
        let limits = material_limits();
        let pos = |p: &str| limits.iter().position(|l| l.pattern == p);
        assert!(pos("SABS 62 Medium") < pos("SABS 62"));
        assert!(pos("ASTM A106 Gr. B") < pos("ASTM A106"));
        assert!(pos("Incoloy 800HT") < pos("Incoloy"));
    }

    #[test]
    fn wear_plate_is_flagged() {
        let limits = material_limits();
        let hardox = limits.iter().find(|l| l.pattern == "Hardox");
        assert!(hardox.is_some_and(|l| l.not_for_pressure_service));
    }
}
