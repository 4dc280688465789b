use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError, OutputFormat};
use crate::conversion::{self, ConversionError};
use crate::piping::{
    self, calculate_local_pipe_result, classify_pressure_class, consolidate_boq,
    find_recommended_schedule, resolve_bnw_set, resolve_flange_weight, resolve_gasket_weight,
    resolve_outside_diameter, schedule_list_for_spec, validate_schedule_for_pressure, BnwSetInfo,
    BoqEntry, BoqOptions, PipeEndConfiguration, PipeInputError, PipeRunInput, QuantityType,
    Resolved, WallThicknessInput,
};
use crate::protection::{advise_external_coating, advise_lining};
use crate::reference::ReferenceTables;
use crate::ui_cli::{self, Cli, Command, PipeArgs, WallArgs};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("{0}")]
    Input(#[from] PipeInputError),
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 정규화 결과 출력용.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NormalizeReport<'a> {
    input: &'a str,
    normalized: String,
    recognized: bool,
    beyond_top_band: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlangeReport {
    nominal_bore_mm: u32,
    pressure_class: String,
    outside_diameter_mm: Resolved<f64>,
    flange_weight_kg: Resolved<f64>,
    bnw_set: Resolved<BnwSetInfo>,
    gasket_type: String,
    gasket_weight_kg: Resolved<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialReport<'a> {
    steel_spec_name: &'a str,
    #[serde(flatten)]
    suitability: piping::SuitabilityResult,
    pt_rating_group: String,
    asme_group: String,
}

/// 파싱된 명령을 실행한다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let json = cli.json || config.output == OutputFormat::Json;
    let tables = ReferenceTables::standard();

    match &cli.command {
        Command::Normalize { designation } => {
            let classified = classify_pressure_class(designation);
            let report = NormalizeReport {
                input: designation,
                normalized: classified.normalized.to_string(),
                recognized: classified.normalized.canonical().is_some(),
                beyond_top_band: classified.beyond_top_band,
            };
            if json {
                print_json(&report)?;
            } else {
                println!("{} → {}", report.input, report.normalized);
                if report.beyond_top_band {
                    println!("경고: 표에 있는 최고 등급을 넘는 표기입니다");
                }
            }
        }
        Command::Flange {
            nb,
            pressure_class,
            gasket,
        } => {
            let class = pressure_class
                .clone()
                .unwrap_or_else(|| config.default_pressure_class.clone());
            let gasket_type = gasket
                .clone()
                .unwrap_or_else(|| config.default_gasket_type.clone());
            let report = FlangeReport {
                nominal_bore_mm: *nb,
                outside_diameter_mm: resolve_outside_diameter(tables, *nb),
                flange_weight_kg: resolve_flange_weight(tables, *nb, Some(&class)),
                bnw_set: resolve_bnw_set(tables, *nb, &class),
                gasket_weight_kg: resolve_gasket_weight(tables, &gasket_type, *nb),
                pressure_class: class,
                gasket_type,
            };
            if json {
                print_json(&report)?;
            } else {
                let bnw = &report.bnw_set.value;
                println!("\n=== {}NB {} ===", report.nominal_bore_mm, report.pressure_class);
                println!(
                    "외경: {:.1} mm ({:?})",
                    report.outside_diameter_mm.value, report.outside_diameter_mm.confidence
                );
                println!(
                    "플랜지 중량: {:.2} kg ({:?})",
                    report.flange_weight_kg.value, report.flange_weight_kg.confidence
                );
                println!(
                    "BNW: {} x {} = {:.3} kg/세트 ({:?})",
                    bnw.bolt_size,
                    bnw.holes_per_flange,
                    bnw.set_weight_kg(),
                    report.bnw_set.confidence
                );
                println!(
                    "가스켓 {}: {:.3} kg ({:?})",
                    report.gasket_type, report.gasket_weight_kg.value, report.gasket_weight_kg.confidence
                );
            }
        }
        Command::Pipe(args) => {
            let input = pipe_input(args, config)?;
            let result = calculate_local_pipe_result(&input);
            if json {
                print_json(&result)?;
            } else {
                ui_cli::print_pipe_result(&result);
            }
        }
        Command::Boq {
            input,
            gasket,
            flange_standard,
            pressure_class,
        } => {
            let entries = read_boq_entries(input)?;
            let options = BoqOptions {
                gasket_type: gasket
                    .clone()
                    .or_else(|| Some(config.default_gasket_type.clone())),
                flange_standard: flange_standard.clone(),
                pressure_class: pressure_class
                    .clone()
                    .or_else(|| Some(config.default_pressure_class.clone())),
            };
            let boq = consolidate_boq(tables, &entries, &options);
            info!(entries = entries.len(), total_kg = boq.total_weight_kg(), "BOQ consolidated");
            if json {
                print_json(&boq)?;
            } else {
                ui_cli::print_boq(&boq);
            }
        }
        Command::Wall(args) => run_wall(args, config, tables, json)?,
        Command::Material {
            steel_spec_name,
            temperature_c,
            pressure_bar,
        } => {
            let report = MaterialReport {
                steel_spec_name,
                suitability: piping::check_material_suitability_with(
                    tables,
                    steel_spec_name,
                    *temperature_c,
                    *pressure_bar,
                ),
                pt_rating_group: piping::pt_rating_material_group(tables, steel_spec_name),
                asme_group: piping::asme_group_number(tables, steel_spec_name),
            };
            if json {
                print_json(&report)?;
            } else {
                ui_cli::print_suitability(
                    report.steel_spec_name,
                    &report.suitability,
                    &report.pt_rating_group,
                    &report.asme_group,
                );
            }
        }
        Command::Materials {
            temperature_c,
            pressure_bar,
        } => {
            let list = piping::suitable_materials(tables, *temperature_c, *pressure_bar);
            if json {
                print_json(&list)?;
            } else {
                for name in list {
                    println!("{name}");
                }
            }
        }
        Command::Lining(args) => {
            let profile = args.apply(read_profile(args.profile.as_deref())?);
            let advice = advise_lining(&profile);
            if json {
                print_json(&advice)?;
            } else {
                ui_cli::print_lining(&advice);
            }
        }
        Command::Coating(args) => {
            let profile = args.apply(read_profile(args.profile.as_deref())?);
            let advice = advise_external_coating(&profile);
            if json {
                print_json(&advice)?;
            } else {
                ui_cli::print_coating(&advice);
            }
        }
    }
    Ok(())
}

fn run_wall(
    args: &WallArgs,
    config: &Config,
    tables: &ReferenceTables,
    json: bool,
) -> Result<(), AppError> {
    let input = WallThicknessInput {
        outside_diameter_mm: resolve_outside_diameter(tables, args.nb).value,
        design_pressure_bar: conversion::pressure_to_bar(args.pressure, &args.pressure_unit)?,
        material_code: args
            .material
            .clone()
            .unwrap_or_else(|| config.default_material_code.clone()),
        temperature_c: conversion::temperature_to_celsius(args.temp, &args.temp_unit)?,
        factors: config.design_factors,
    };

    if let Some(thickness) = args.thickness {
        let validation = validate_schedule_for_pressure(thickness, &input);
        if json {
            print_json(&validation)?;
        } else {
            ui_cli::print_validation(&validation);
        }
        return Ok(());
    }

    let schedules = schedule_list_for_spec(tables, args.nb, &args.spec);
    let recommendation = find_recommended_schedule(&schedules, &input);
    if json {
        print_json(&recommendation)?;
    } else {
        ui_cli::print_schedule(&recommendation);
    }
    Ok(())
}

/// 명령행 값으로 직관 입력을 만들고 검증한다.
fn pipe_input(args: &PipeArgs, config: &Config) -> Result<PipeRunInput, AppError> {
    let input = PipeRunInput {
        nominal_bore_mm: args.nb,
        wall_thickness_mm: args.wt,
        individual_pipe_length_m: args.length,
        quantity_value: args.quantity,
        quantity_type: args.quantity_type.parse::<QuantityType>()?,
        end_configuration: args.ends.parse::<PipeEndConfiguration>()?,
        pressure_class: args
            .pressure_class
            .clone()
            .or_else(|| Some(config.default_pressure_class.clone())),
    };
    input.validate()?;
    Ok(input)
}

/// BOQ 입력 파일을 읽고 모든 구간을 검증한다.
fn read_boq_entries(path: &Path) -> Result<Vec<BoqEntry>, AppError> {
    let entries: Vec<BoqEntry> = serde_json::from_str(&fs::read_to_string(path)?)?;
    for entry in &entries {
        entry.run.validate()?;
    }
    Ok(entries)
}

fn read_profile<T>(path: Option<&Path>) -> Result<T, AppError>
where
    T: Default + serde::de::DeserializeOwned,
{
    match path {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => Ok(T::default()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
