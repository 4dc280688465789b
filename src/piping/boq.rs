//! 직관 구간들을 BOQ 항목(관, 플랜지, BNW 세트, 가스켓, 맹플랜지)으로 묶는다.
//!
//! 플랜지 중량은 단품 기준이고 BNW와 가스켓은 별도 항목이므로, 모든 항목 중량을 더해도
//! 볼트나 가스켓이 두 번 계산되지 않는다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::pipe_weight::{calculate_local_pipe_result_with, PipeRunInput};
use super::pressure_class::DEFAULT_PRESSURE_CLASS;
use super::resolvers::{
    blank_flange_surface_area, blank_flange_weight, resolve_bnw_set, resolve_flange_weight,
    resolve_gasket_weight, SurfaceArea,
};
use crate::reference::ReferenceTables;

/// BOQ 입력 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoqEntry {
    #[serde(flatten)]
    pub run: PipeRunInput,
    /// 관 1본당 맹플랜지 수
    #[serde(default)]
    pub blank_flanges_per_pipe: u32,
    /// 맹플랜지 호칭경. 없으면 관 호칭경.
    #[serde(default)]
    pub blank_flange_nb_mm: Option<u32>,
}

impl BoqEntry {
    pub fn new(run: PipeRunInput) -> Self {
        Self {
            run,
            blank_flanges_per_pipe: 0,
            blank_flange_nb_mm: None,
        }
    }
}

/// 전체 BOQ에 공통으로 적용되는 사양.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoqOptions {
    pub gasket_type: Option<String>,
    /// 예: "SABS 1123", "ASME B16.5"
    pub flange_standard: Option<String>,
    /// 구간에 등급이 없을 때 쓰는 등급
    pub pressure_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub key: String,
    pub description: String,
    pub qty: f64,
    pub unit: String,
    pub weight_kg: f64,
    /// 이 항목에 기여한 입력 줄 번호(1부터)
    pub entries: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas: Option<SurfaceArea>,
}

/// 키 삽입 순서를 유지하는 항목 묶음.
#[derive(Debug, Clone, Default)]
struct ItemGroup {
    items: Vec<LineItem>,
    index: HashMap<String, usize>,
}

impl ItemGroup {
    fn add(
        &mut self,
        key: String,
        description: impl FnOnce() -> String,
        unit: &str,
        qty: f64,
        weight_kg: f64,
        entry_no: usize,
    ) -> &mut LineItem {
        let slot = match self.index.get(&key) {
            Some(slot) => {
                let item = &mut self.items[*slot];
                item.qty += qty;
                item.weight_kg += weight_kg;
                item.entries.push(entry_no);
                *slot
            }
            None => {
                self.items.push(LineItem {
                    key: key.clone(),
                    description: description(),
                    qty,
                    unit: unit.to_string(),
                    weight_kg,
                    entries: vec![entry_no],
                    areas: None,
                });
                self.index.insert(key, self.items.len() - 1);
                self.items.len() - 1
            }
        };
        &mut self.items[slot]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedBoq {
    pub pipes: Vec<LineItem>,
    pub flanges: Vec<LineItem>,
    pub blank_flanges: Vec<LineItem>,
    pub bnw_sets: Vec<LineItem>,
    pub gaskets: Vec<LineItem>,
}

impl ConsolidatedBoq {
    pub fn sections(&self) -> [(&'static str, &[LineItem]); 5] {
        [
            ("Pipes", &self.pipes),
            ("Flanges", &self.flanges),
            ("Blank Flanges", &self.blank_flanges),
            ("BNW Sets", &self.bnw_sets),
            ("Gaskets", &self.gaskets),
        ]
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.sections()
            .iter()
            .flat_map(|(_, items)| items.iter())
            .map(|item| item.weight_kg)
            .sum()
    }
}

/// BOQ 항목 통합. 같은 키의 항목은 수량과 중량을 더하고 줄 번호를 모은다.
pub fn consolidate_boq(
    tables: &ReferenceTables,
    entries: &[BoqEntry],
    options: &BoqOptions,
) -> ConsolidatedBoq {
    let mut pipes = ItemGroup::default();
    let mut flanges = ItemGroup::default();
    let mut blanks = ItemGroup::default();
    let mut bnw_sets = ItemGroup::default();
    let mut gaskets = ItemGroup::default();

    for (index, entry) in entries.iter().enumerate() {
        let entry_no = index + 1;
        let run = &entry.run;
        let nb = run.nominal_bore_mm;
        let class = run
            .pressure_class
            .as_deref()
            .or(options.pressure_class.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PRESSURE_CLASS.designation());
        let flange_spec = match options.flange_standard.as_deref().map(str::trim) {
            Some(standard) if !standard.is_empty() => format!("{standard} {class}"),
            _ => class.to_string(),
        };

        let calc = calculate_local_pipe_result_with(tables, run);
        let pipe_qty = calc.calculated_pipe_count as f64;

        pipes.add(
            format!("PIPE_{nb}NB_{}", run.wall_thickness_mm),
            || format!("{nb}NB x {} mm W/T Pipe", run.wall_thickness_mm),
            "m",
            calc.calculated_total_length,
            calc.total_pipe_weight,
            entry_no,
        );

        let ends = run.end_configuration;
        if ends.flange_count() > 0 {
            let type_name = ends.flange_type_name();
            let flange_qty = f64::from(ends.flange_count()) * pipe_qty;
            let unit_weight = resolve_flange_weight(tables, nb, Some(class)).value;
            flanges.add(
                format!("FLANGE_{nb}_{flange_spec}_{type_name}"),
                || format!("{nb}NB {type_name} Flange {flange_spec}"),
                "Each",
                flange_qty,
                unit_weight * flange_qty,
                entry_no,
            );

            let bnw = resolve_bnw_set(tables, nb, class).value;
            let set_qty = f64::from(ends.bolt_sets_per_pipe()) * pipe_qty;
            if set_qty > 0.0 {
                bnw_sets.add(
                    format!("BNW_{}_x{}_{nb}NB_{flange_spec}", bnw.bolt_size, bnw.holes_per_flange),
                    || {
                        format!(
                            "{} BNW Set x{} for {nb}NB {flange_spec}",
                            bnw.bolt_size, bnw.holes_per_flange
                        )
                    },
                    "sets",
                    set_qty,
                    bnw.set_weight_kg() * set_qty,
                    entry_no,
                );

                if let Some(gasket) = options.gasket_type.as_deref().filter(|g| !g.is_empty()) {
                    let unit_weight = resolve_gasket_weight(tables, gasket, nb).value;
                    gaskets.add(
                        format!("GASKET_{gasket}_{nb}NB_{flange_spec}"),
                        || format!("{gasket} Gasket {nb}NB {flange_spec}"),
                        "Each",
                        set_qty,
                        unit_weight * set_qty,
                        entry_no,
                    );
                }
            }
        }

        if entry.blank_flanges_per_pipe > 0 {
            let blank_nb = entry.blank_flange_nb_mm.unwrap_or(nb);
            let blank_qty = f64::from(entry.blank_flanges_per_pipe) * pipe_qty;
            let unit_weight = blank_flange_weight(tables, blank_nb, class).value;
            let area = blank_flange_surface_area(tables, blank_nb).value;
            let item = blanks.add(
                format!("BLANK_FLANGE_{blank_nb}_{flange_spec}"),
                || format!("{blank_nb}NB Blank Flange {flange_spec}"),
                "Each",
                blank_qty,
                unit_weight * blank_qty,
                entry_no,
            );
            let prev = item.areas.unwrap_or(SurfaceArea {
                external_m2: 0.0,
                internal_m2: 0.0,
            });
            item.areas = Some(SurfaceArea {
                external_m2: prev.external_m2 + area.external_m2 * blank_qty,
                internal_m2: prev.internal_m2 + area.internal_m2 * blank_qty,
            });
        }
    }

    ConsolidatedBoq {
        pipes: pipes.items,
        flanges: flanges.items,
        blank_flanges: blanks.items,
        bnw_sets: bnw_sets.items,
        gaskets: gaskets.items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piping::end_config::PipeEndConfiguration;
    use crate::piping::pipe_weight::QuantityType;

    fn entry(nb: u32, ends: PipeEndConfiguration, pipes: f64) -> BoqEntry {
        BoqEntry::new(PipeRunInput {
            nominal_bore_mm: nb,
            wall_thickness_mm: 6.02,
            individual_pipe_length_m: 6.0,
            quantity_value: pipes,
            quantity_type: QuantityType::NumberOfPipes,
            end_configuration: ends,
            pressure_class: Some("PN16".to_string()),
        })
    }

    #[test]
    fn same_spec_lines_are_merged() {
        let entries = [
            entry(100, PipeEndConfiguration::Fbe, 2.0),
            entry(100, PipeEndConfiguration::Fbe, 3.0),
        ];
        let options = BoqOptions {
            gasket_type: Some("SW-316".to_string()),
            ..BoqOptions::default()
        };
        let boq = consolidate_boq(ReferenceTables::standard(), &entries, &options);

        assert_eq!(boq.flanges.len(), 1);
        let flange = &boq.flanges[0];
        assert_eq!(flange.description, "100NB Slip On Flange PN16");
        assert_eq!(flange.qty, 10.0);
        assert_eq!(flange.entries, [1, 2]);
        assert!((flange.weight_kg - 60.0).abs() < 1e-9);

        let bnw = &boq.bnw_sets[0];
        assert_eq!(bnw.key, "BNW_M16x75_x8_100NB_PN16");
        assert_eq!(bnw.qty, 5.0);
        assert!((bnw.weight_kg - 0.146 * 8.0 * 5.0).abs() < 1e-9);

        let gasket = &boq.gaskets[0];
        assert_eq!(gasket.qty, 5.0);
        assert!((gasket.weight_kg - 0.75).abs() < 1e-9);
    }

    #[test]
    fn plain_ends_produce_only_pipe() {
        let boq = consolidate_boq(
            ReferenceTables::standard(),
            &[entry(50, PipeEndConfiguration::Pe, 4.0)],
            &BoqOptions::default(),
        );
        assert_eq!(boq.pipes.len(), 1);
        assert!(boq.flanges.is_empty());
        assert!(boq.bnw_sets.is_empty());
    }

    #[test]
    fn blank_flanges_carry_areas() {
        let mut e = entry(200, PipeEndConfiguration::Foe, 2.0);
        e.blank_flanges_per_pipe = 1;
        let boq = consolidate_boq(ReferenceTables::standard(), &[e], &BoqOptions::default());
        let blank = &boq.blank_flanges[0];
        assert_eq!(blank.qty, 2.0);
        assert!((blank.weight_kg - 39.6).abs() < 1e-9);
        assert!(blank.areas.is_some_and(|a| a.external_m2 > a.internal_m2));
    }

    #[test]
    fn flange_standard_prefixes_spec() {
        let options = BoqOptions {
            flange_standard: Some("SABS 1123".to_string()),
            ..BoqOptions::default()
        };
        let boq = consolidate_boq(
            ReferenceTables::standard(),
            &[entry(80, PipeEndConfiguration::FoeRf, 1.0)],
            &options,
        );
        assert_eq!(boq.flanges[0].description, "80NB Rotating Flange SABS 1123 PN16");
    }
}
