//! 관 규격 → 플랜지 P-T 등급 재질 그룹(ASME B16.5) 매핑.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialGroupMapping {
    pub pattern: String,
    pub pt_rating_group: String,
    pub asme_group: String,
    pub description: String,
}

/// (패턴, P-T 그룹, ASME 그룹 번호, 설명). 대소문자 구분 없이 포함 여부로 비교하며
/// 먼저 선언된 항목이 이긴다.
#[rustfmt::skip]
const MAPPINGS: &[(&str, &str, &str, &str)] = &[
    ("A105", "Carbon Steel A105 (Group 1.1)", "1.1", "Forged carbon steel flanges"),
    ("A106", "Carbon Steel A105 (Group 1.1)", "1.1", "Seamless carbon steel pipe (use A105 for flanges)"),
    ("A53", "Carbon Steel A105 (Group 1.1)", "1.1", "Welded/seamless carbon steel pipe (use A105 for flanges)"),
    ("API 5L", "Carbon Steel A105 (Group 1.1)", "1.1", "Line pipe (use A105 for flanges)"),
    ("SABS 62", "Carbon Steel A105 (Group 1.1)", "1.1", "SA ERW pipe (use A105 for flanges)"),
    ("SABS 719", "Carbon Steel A105 (Group 1.1)", "1.1", "SA large bore ERW pipe (use A105 for flanges)"),
    ("A333 Gr. 3", "Nickel Alloy Steel LF3 (Group 9A)", "9A", "3.5% Nickel low-temp pipe (use A350 LF3 for flanges). P-No. 9A."),
    ("A333 Gr. 4", "Nickel Alloy Steel LF3 (Group 9A)", "9A", "0.75% Nickel low-temp pipe (use A350 LF2 for flanges). P-No. 9A."),
    ("A333 Gr. 7", "Nickel Alloy Steel LF3 (Group 9A)", "9A", "2.5% Nickel low-temp pipe (use A350 LF3 for flanges). P-No. 9A."),
    ("A333 Gr. 5", "9% Nickel Steel (Group 11A)", "11A", "9% Nickel cryogenic pipe. P-No. 11A."),
    ("A333 Gr. 8", "9% Nickel Steel (Group 11A)", "11A", "9% Nickel cryogenic pipe. P-No. 11A."),
    ("A333 Gr. 6", "Carbon Steel A105 (Group 1.1)", "1.1", "Low-temp carbon steel (use A350 LF2 for flanges). P-No. 1."),
    ("A333 Gr. 1", "Carbon Steel A105 (Group 1.1)", "1.1", "Low-temp carbon steel (use A350 LF2 for flanges). P-No. 1."),
    ("A333", "Carbon Steel A105 (Group 1.1)", "1.1", "Low-temp carbon steel (use A350 LF2 for flanges). Specify grade for nickel alloy steels."),
    ("A350 LF3", "Nickel Alloy Steel LF3 (Group 9A)", "9A", "3.5% Nickel forged flanges for A333 Gr 3/7. P-No. 9A."),
    ("A350 LF2", "Carbon Steel A105 (Group 1.1)", "1.1", "Low-temp carbon steel forged flanges. P-No. 1."),
    ("A420 WPL3", "Nickel Alloy Steel LF3 (Group 9A)", "9A", "3.5% Nickel wrought fittings for A333 Gr 3. P-No. 9A."),
    ("A420 WPL6", "Carbon Steel A105 (Group 1.1)", "1.1", "Low-temp carbon steel wrought fittings. P-No. 1."),
    ("A335 P11", "Low Alloy Steel F11 (Group 1.9)", "1.9", "1.25Cr-0.5Mo alloy pipe"),
    ("A335 P12", "Low Alloy Steel F11 (Group 1.9)", "1.9", "1Cr-0.5Mo alloy pipe"),
    ("A335 P22", "Low Alloy Steel F22 (Group 1.10)", "1.10", "2.25Cr-1Mo alloy pipe"),
    ("A335 P5", "Low Alloy Steel F22 (Group 1.10)", "1.10", "5Cr-0.5Mo alloy pipe"),
    ("A335 P9", "Low Alloy Steel F22 (Group 1.10)", "1.10", "9Cr-1Mo alloy pipe"),
    ("A335 P91", "Low Alloy Steel F91 (Group 1.14)", "1.14", "9Cr-1Mo-V advanced alloy pipe"),
    ("TP304", "Stainless Steel 304 (Group 2.1)", "2.1", "Austenitic SS 18Cr-8Ni"),
    ("304L", "Stainless Steel 304 (Group 2.1)", "2.1", "Low carbon austenitic SS"),
    ("SS-304", "Stainless Steel 304 (Group 2.1)", "2.1", "Stainless Steel 304 (code)"),
    ("TP316", "Stainless Steel 316 (Group 2.2)", "2.2", "Austenitic SS 16Cr-12Ni-2Mo"),
    ("316L", "Stainless Steel 316 (Group 2.2)", "2.2", "Low carbon molybdenum SS"),
    ("SS-316", "Stainless Steel 316 (Group 2.2)", "2.2", "Stainless Steel 316 (code)"),
    ("TP321", "Stainless Steel 321 (Group 2.2)", "2.2", "Ti-stabilized austenitic SS"),
    ("TP347", "Stainless Steel 347 (Group 2.2)", "2.2", "Nb-stabilized austenitic SS"),
    ("TP405", "Ferritic Stainless Steel (Group 7.1)", "7.1", "12Cr ferritic stainless steel"),
    ("TP409", "Ferritic Stainless Steel (Group 7.1)", "7.1", "11Cr-Ti ferritic stainless steel"),
    ("TP430", "Ferritic Stainless Steel (Group 7.1)", "7.1", "17Cr ferritic stainless steel"),
    ("TP434", "Ferritic Stainless Steel (Group 7.1)", "7.1", "17Cr-1Mo ferritic stainless steel"),
    ("TP410", "Martensitic Stainless Steel (Group 6.1)", "6.1", "13Cr martensitic stainless steel"),
    ("TP410S", "Martensitic Stainless Steel (Group 6.1)", "6.1", "13Cr low-carbon martensitic stainless steel"),
    ("TP420", "Martensitic Stainless Steel (Group 6.3)", "6.3", "13Cr high-carbon martensitic stainless steel"),
    ("A268", "Ferritic Stainless Steel (Group 7.1)", "7.1", "Ferritic/martensitic stainless steel tubing"),
    ("Ferritic", "Ferritic Stainless Steel (Group 7.1)", "7.1", "Generic ferritic stainless steel"),
    ("Martensitic", "Martensitic Stainless Steel (Group 6.1)", "6.1", "Generic martensitic stainless steel"),
    ("A790 S31803", "Duplex Stainless Steel F51 (Group 3.2)", "3.2", "Duplex 2205 (UNS S31803)"),
    ("A790 S32205", "Duplex Stainless Steel F51 (Group 3.2)", "3.2", "Duplex 2205 (UNS S32205)"),
    ("A790 S32750", "Super Duplex Stainless Steel F55 (Group 3.3)", "3.3", "Super Duplex 2507 (UNS S32750)"),
    ("A790", "Duplex Stainless Steel F51 (Group 3.2)", "3.2", "Duplex stainless steel pipe"),
    ("S31803", "Duplex Stainless Steel F51 (Group 3.2)", "3.2", "Duplex 2205 (UNS S31803)"),
    ("S32205", "Duplex Stainless Steel F51 (Group 3.2)", "3.2", "Duplex 2205 (UNS S32205)"),
    ("S32750", "Super Duplex Stainless Steel F55 (Group 3.3)", "3.3", "Super Duplex 2507 (UNS S32750)"),
    ("Super Duplex", "Super Duplex Stainless Steel F55 (Group 3.3)", "3.3", "Super Duplex stainless steel"),
    ("Duplex", "Duplex Stainless Steel F51 (Group 3.2)", "3.2", "Generic duplex stainless steel"),
    ("EN 10216", "Carbon Steel A105 (Group 1.1)", "1.1", "European seamless steel tube"),
    ("EN 10217", "Carbon Steel A105 (Group 1.1)", "1.1", "European welded steel tube"),
    ("EN 10255", "Carbon Steel A105 (Group 1.1)", "1.1", "European ERW tube (similar to SABS 62)"),
    ("A358", "Stainless Steel 304 (Group 2.1)", "2.1", "Welded stainless steel pipe"),
    ("A182 F5", "Alloy Steel A182 F5 (Group 1.9)", "1.9", "5Cr-0.5Mo forged flange"),
    ("A182 F9", "Alloy Steel A182 F9 (Group 1.10)", "1.10", "9Cr-1Mo forged flange"),
    ("A182 F11", "Low Alloy Steel F11 (Group 1.9)", "1.9", "1.25Cr-0.5Mo forged flange"),
    ("A182 F22", "Low Alloy Steel F22 (Group 1.10)", "1.10", "2.25Cr-1Mo forged flange"),
    ("A182 F91", "Alloy Steel A182 F91 (Group 1.14)", "1.14", "9Cr-1Mo-V forged flange"),
    ("F304", "Stainless Steel 304 (Group 2.1)", "2.1", "304 SS forged flange"),
    ("F316", "Stainless Steel 316 (Group 2.2)", "2.2", "316 SS forged flange"),
    ("Incoloy 800", "Incoloy 800/800H (Group 4.4)", "4.4", "Nickel-iron-chromium alloy"),
    ("Incoloy", "Incoloy 800/800H (Group 4.4)", "4.4", "Generic Incoloy alloy"),
    ("Titanium Gr. 2", "Titanium Grade 2 (Group 5.1)", "5.1", "Commercially pure titanium"),
    ("Titanium", "Titanium Grade 2 (Group 5.1)", "5.1", "Generic titanium (defaults to Gr. 2)"),
    ("Inconel 625", "Inconel 625 (Group 4.1)", "4.1", "Nickel-chromium-molybdenum superalloy"),
    ("Inconel", "Inconel 625 (Group 4.1)", "4.1", "Generic Inconel alloy"),
    ("Hastelloy C-276", "Hastelloy C276 (Group 4.3)", "4.3", "Nickel-molybdenum-chromium superalloy"),
    ("Hastelloy", "Hastelloy C276 (Group 4.3)", "4.3", "Corrosion-resistant nickel alloy"),
    ("Monel 400", "Monel 400 (Group 4.2)", "4.2", "Nickel-copper alloy 67Ni-30Cu"),
    ("Monel", "Monel 400 (Group 4.2)", "4.2", "Nickel-copper alloy"),
    ("Nickel 200", "Nickel 200 (Group 4.5)", "4.5", "Commercially pure nickel"),
    ("Nickel 201", "Nickel 200 (Group 4.5)", "4.5", "Low-carbon nickel"),
    ("Nickel", "Nickel 200 (Group 4.5)", "4.5", "Generic pure nickel"),
    ("Cu-Ni 90-10", "Copper-Nickel 90-10 (Group 4.6)", "4.6", "90% Copper, 10% Nickel marine alloy"),
    ("Cu-Ni 70-30", "Copper-Nickel 70-30 (Group 4.7)", "4.7", "70% Copper, 30% Nickel marine alloy"),
    ("C70600", "Copper-Nickel 90-10 (Group 4.6)", "4.6", "UNS C70600 Cu-Ni 90-10"),
    ("C71500", "Copper-Nickel 70-30 (Group 4.7)", "4.7", "UNS C71500 Cu-Ni 70-30"),
    ("B466", "Copper-Nickel 90-10 (Group 4.6)", "4.6", "Cu-Ni seamless pipe"),
    ("S32707", "Hyper Duplex Stainless Steel (Group 3.4)", "3.4", "Hyper Duplex 27Cr-7Ni-5Mo"),
    ("Hyper Duplex", "Hyper Duplex Stainless Steel (Group 3.4)", "3.4", "Hyper Duplex stainless steel"),
    ("A387", "Low Alloy Steel F22 (Group 1.10)", "1.10", "Chrome-moly pressure vessel plate"),
    ("A420", "Carbon Steel A105 (Group 1.1)", "1.1", "Low-temp wrought fittings"),
    ("A369", "Low Alloy Steel F11 (Group 1.9)", "1.9", "Forged alloy pipe"),
    ("A210", "Carbon Steel A105 (Group 1.1)", "1.1", "Boiler/superheater tubes"),
    ("A214", "Carbon Steel A105 (Group 1.1)", "1.1", "ERW heat exchanger tubes"),
    ("A334", "Carbon Steel A105 (Group 1.1)", "1.1", "Low-temp heat exchanger tubes"),
    ("DIN 2448", "Carbon Steel A105 (Group 1.1)", "1.1", "German seamless carbon steel pipe"),
    ("DIN 2458", "Carbon Steel A105 (Group 1.1)", "1.1", "German welded carbon steel pipe"),
    ("DIN 2391", "Carbon Steel A105 (Group 1.1)", "1.1", "German precision seamless steel tube"),
    ("St35.8", "Carbon Steel A105 (Group 1.1)", "1.1", "DIN carbon steel grade"),
    ("St37.0", "Carbon Steel A105 (Group 1.1)", "1.1", "DIN structural carbon steel grade"),
    ("St45.8", "Carbon Steel A105 (Group 1.1)", "1.1", "DIN high-strength carbon steel grade"),
    ("St52", "Carbon Steel A105 (Group 1.1)", "1.1", "DIN high-strength structural steel grade"),
    ("1.4301", "Stainless Steel 304 (Group 2.1)", "2.1", "EN/DIN 304 equivalent (X5CrNi18-10)"),
    ("1.4306", "Stainless Steel 304 (Group 2.1)", "2.1", "EN/DIN 304L equivalent (X2CrNi19-11)"),
    ("1.4401", "Stainless Steel 316 (Group 2.2)", "2.2", "EN/DIN 316 equivalent (X5CrNiMo17-12-2)"),
    ("1.4404", "Stainless Steel 316 (Group 2.2)", "2.2", "EN/DIN 316L equivalent (X2CrNiMo17-12-2)"),
    ("1.4462", "Duplex Stainless Steel F51 (Group 3.2)", "3.2", "EN/DIN Duplex 2205 equivalent"),
    ("1.4410", "Super Duplex Stainless Steel F55 (Group 3.3)", "3.3", "EN/DIN Super Duplex 2507 equivalent"),
    ("JIS G3454", "Carbon Steel A105 (Group 1.1)", "1.1", "Japanese carbon steel pipe for pressure service"),
    ("JIS G3456", "Carbon Steel A105 (Group 1.1)", "1.1", "Japanese high-temp carbon steel pipe"),
    ("JIS G3459", "Stainless Steel 304 (Group 2.1)", "2.1", "Japanese stainless steel pipe"),
    ("STPG370", "Carbon Steel A105 (Group 1.1)", "1.1", "JIS carbon steel grade (equivalent to A106 Gr B)"),
    ("STPG410", "Carbon Steel A105 (Group 1.1)", "1.1", "JIS high-strength carbon steel grade"),
    ("STPH370", "Carbon Steel A105 (Group 1.1)", "1.1", "JIS high-temp carbon steel grade"),
    ("SUS304", "Stainless Steel 304 (Group 2.1)", "2.1", "JIS 304 stainless steel"),
    ("SUS316", "Stainless Steel 316 (Group 2.2)", "2.2", "JIS 316 stainless steel"),
    ("SUS321", "Stainless Steel 321 (Group 2.2)", "2.2", "JIS 321 stainless steel"),
    ("GB/T 8163", "Carbon Steel A105 (Group 1.1)", "1.1", "Chinese seamless carbon steel pipe"),
    ("GB/T 9711", "Carbon Steel A105 (Group 1.1)", "1.1", "Chinese line pipe (equivalent to API 5L)"),
    ("GB/T 14976", "Stainless Steel 304 (Group 2.1)", "2.1", "Chinese stainless steel pipe"),
    ("20#", "Carbon Steel A105 (Group 1.1)", "1.1", "Chinese carbon steel grade (equivalent to A106 Gr A)"),
    ("45#", "Carbon Steel A105 (Group 1.1)", "1.1", "Chinese medium carbon steel grade"),
    ("Q345", "Carbon Steel A105 (Group 1.1)", "1.1", "Chinese structural steel grade"),
    ("0Cr18Ni9", "Stainless Steel 304 (Group 2.1)", "2.1", "Chinese 304 stainless equivalent"),
    ("0Cr17Ni12Mo2", "Stainless Steel 316 (Group 2.2)", "2.2", "Chinese 316 stainless equivalent"),
    ("Carbon Steel", "Carbon Steel A105 (Group 1.1)", "1.1", "Generic carbon steel"),
    ("Stainless Steel", "Stainless Steel 304 (Group 2.1)", "2.1", "Generic stainless steel (defaults to 304)"),
];

pub fn material_groups() -> Vec<MaterialGroupMapping> {
    MAPPINGS
        .iter()
        .map(|(pattern, pt, asme, description)| MaterialGroupMapping {
            pattern: pattern.to_string(),
            pt_rating_group: pt.to_string(),
            asme_group: asme.to_string(),
            description: description.to_string(),
        })
        .collect()
}
