#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path, path::PathBuf};
use solar_finance_toolbox::{
    config, export,
    finance::{self, BreakEven, Projection},
    i18n::{self, keys},
    report::{format_break_even, format_currency, format_energy},
    system::{EquipmentPricing, FinancingMode, PricingMode, SystemConfiguration},
    units::{SunHoursMode, UsagePeriod},
};
use tracing_subscriber::EnvFilter;

/// 태양광 설비 재무 계산기 (GUI)
#[derive(Debug, Parser)]
#[command(name = "solar_finance_toolbox", version, about)]
struct GuiArgs {
    /// 언어 (auto/ko/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let args = GuiArgs::parse();

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1200.0, 780.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app_cfg = match config::load_or_create(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("설정 로드 실패, 기본값 사용: {e}");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, app_cfg.language_pack_dir.as_deref());
    let config_path = args.config;

    eframe::run_native(
        "Solar Finance Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg, tr, config_path))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 기본 폰트 뒤에 폴백으로 등록한다.
/// 1) assets/fonts/ 2) OS별 시스템 폰트 순으로 찾는다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
        PathBuf::from("assets/fonts/malgun.ttf"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.push(fonts.join("malgun.ttf"));
        candidates.push(fonts.join("gulim.ttc"));
    }
    candidates.extend(
        [
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; using default fonts.".into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Projection,
    Amortization,
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    tab: Tab,
    /// 마지막으로 계산에 사용한 구성. 달라지면 전체를 다시 계산한다.
    computed_for: SystemConfiguration,
    projection: Projection,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, tr: i18n::Translator, config_path: PathBuf) -> Self {
        let projection = finance::project(&config.system);
        Self {
            computed_for: config.system.clone(),
            config,
            config_path,
            tr,
            tab: Tab::Projection,
            projection,
            status: None,
        }
    }

    fn refresh_projection(&mut self) {
        if self.computed_for != self.config.system {
            self.projection = finance::project(&self.config.system);
            self.computed_for = self.config.system.clone();
        }
    }

    fn export_json(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("projection.json")
            .save_file()
        else {
            return;
        };
        self.status = Some(
            match export::write_json(&path, &self.config.system, &self.projection) {
                Ok(()) => format!("{} {}", self.tr.t(keys::EXPORT_DONE), path.display()),
                Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
            },
        );
    }

    fn save_config(&mut self) {
        self.status = Some(match config::save_to(&self.config, &self.config_path) {
            Ok(()) => self.tr.t(keys::EDIT_SAVED).into_owned(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn inputs_ui(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str| tr.t(key).into_owned();
        let sys = &mut self.config.system;

        egui::CollapsingHeader::new(txt(keys::GUI_SECTION_EQUIPMENT))
            .default_open(true)
            .show(ui, |ui| {
                equipment_ui(ui, &txt, "panels", keys::EQUIP_PANELS, &mut sys.panels);
                egui::Grid::new("panel_extra").num_columns(2).show(ui, |ui| {
                    ui.label(txt(keys::PROMPT_PANEL_WATTAGE));
                    ui.add(egui::DragValue::new(&mut sys.panel_wattage_w).speed(5.0).clamp_range(0.0..=2000.0));
                    ui.end_row();
                });
                equipment_ui(ui, &txt, "inverters", keys::EQUIP_INVERTERS, &mut sys.inverters);
                equipment_ui(ui, &txt, "batteries", keys::EQUIP_BATTERIES, &mut sys.batteries);
                egui::Grid::new("fixed_costs").num_columns(2).show(ui, |ui| {
                    ui.label(txt(keys::PROMPT_INSTALLATION));
                    ui.add(egui::DragValue::new(&mut sys.installation_cost).speed(50.0));
                    ui.end_row();
                    ui.label(txt(keys::PROMPT_LABOR));
                    ui.add(egui::DragValue::new(&mut sys.labor_cost).speed(50.0));
                    ui.end_row();
                });
            });

        egui::CollapsingHeader::new(txt(keys::GUI_SECTION_ENERGY))
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("energy_grid").num_columns(2).show(ui, |ui| {
                    ui.label(txt(keys::PROMPT_USAGE_PERIOD));
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut sys.usage_period, UsagePeriod::Monthly, txt(keys::GUI_MODE_MONTHLY));
                        ui.selectable_value(&mut sys.usage_period, UsagePeriod::Yearly, txt(keys::GUI_MODE_YEARLY));
                    });
                    ui.end_row();
                    ui.label(txt(keys::PROMPT_USAGE));
                    ui.add(egui::DragValue::new(&mut sys.energy_usage_kwh).speed(10.0).clamp_range(0.0..=f64::MAX));
                    ui.end_row();
                    ui.label(txt(keys::PROMPT_ENERGY_COST));
                    ui.add(egui::DragValue::new(&mut sys.energy_cost).speed(1.0).clamp_range(0.0..=f64::MAX));
                    ui.end_row();
                    ui.label(txt(keys::PROMPT_SUN_HOURS_MODE));
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut sys.sun_hours_mode, SunHoursMode::Daily, txt(keys::GUI_MODE_DAILY));
                        ui.selectable_value(&mut sys.sun_hours_mode, SunHoursMode::Yearly, txt(keys::GUI_MODE_YEARLY));
                    });
                    ui.end_row();
                    ui.label(txt(keys::PROMPT_SUN_HOURS));
                    ui.add(egui::DragValue::new(&mut sys.sun_hours).speed(0.1).clamp_range(0.0..=8760.0));
                    ui.end_row();
                });
            });

        egui::CollapsingHeader::new(txt(keys::GUI_SECTION_FINANCING))
            .default_open(true)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut sys.financing, FinancingMode::Cash, txt(keys::GUI_MODE_CASH));
                    ui.selectable_value(&mut sys.financing, FinancingMode::Loan, txt(keys::GUI_MODE_LOAN));
                });
                if sys.is_loan() {
                    egui::Grid::new("loan_grid").num_columns(2).show(ui, |ui| {
                        ui.label(txt(keys::PROMPT_LOAN_AMOUNT));
                        ui.add(egui::DragValue::new(&mut sys.loan_amount).speed(100.0));
                        ui.end_row();
                        ui.label(txt(keys::PROMPT_LOAN_TERM));
                        ui.add(
                            egui::DragValue::new(&mut sys.loan_term_years)
                                .clamp_range(1..=finance::MAX_LOAN_TERM_YEARS),
                        );
                        ui.end_row();
                        ui.label(txt(keys::PROMPT_RATE_FROM_CREDIT));
                        ui.checkbox(&mut sys.rate_from_credit_score, "");
                        ui.end_row();
                        if sys.rate_from_credit_score {
                            ui.label(txt(keys::PROMPT_CREDIT_SCORE));
                            ui.add(
                                egui::DragValue::new(&mut sys.credit_score)
                                    .clamp_range(300.0..=850.0)
                                    .max_decimals(0),
                            );
                            ui.end_row();
                            let tier = finance::CreditTier::from_score(sys.credit_score);
                            ui.label(txt(keys::RESULT_CREDIT_RATE));
                            ui.label(format!("{:.1}% ({})", tier.annual_rate_percent(), txt(tier.label_key())));
                            ui.end_row();
                        } else {
                            ui.label(txt(keys::PROMPT_LOAN_RATE));
                            ui.add(egui::DragValue::new(&mut sys.loan_interest_rate).speed(0.05).clamp_range(0.0..=30.0));
                            ui.end_row();
                        }
                    });
                }
            });

        egui::CollapsingHeader::new(txt(keys::GUI_SECTION_ASSUMPTIONS))
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("assumption_grid").num_columns(2).show(ui, |ui| {
                    ui.label(txt(keys::PROMPT_PERFORMANCE_RATIO));
                    ui.add(egui::DragValue::new(&mut sys.performance_ratio).speed(0.01).clamp_range(0.0..=1.0));
                    ui.end_row();
                    ui.label(txt(keys::PROMPT_DEGRADATION));
                    ui.add(egui::DragValue::new(&mut sys.degradation_rate).speed(0.05).clamp_range(0.0..=10.0));
                    ui.end_row();
                    ui.label(txt(keys::PROMPT_INFLATION));
                    ui.add(egui::DragValue::new(&mut sys.utility_inflation_rate).speed(0.1).clamp_range(-10.0..=20.0));
                    ui.end_row();
                });
            });
    }

    fn summary_ui(&self, ui: &mut egui::Ui) {
        let txt = |key: &str| self.tr.t(key).into_owned();
        let sym = self.config.currency_symbol.as_str();
        let s = &self.projection.summary;
        egui::Grid::new("summary_grid")
            .num_columns(4)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.label(txt(keys::SUMMARY_TOTAL_COST));
                ui.strong(format_currency(sym, s.total_cost));
                ui.label(txt(keys::SUMMARY_EFFECTIVE_COST));
                ui.strong(format_currency(sym, s.effective_cost));
                ui.end_row();
                ui.label(txt(keys::SUMMARY_TOTAL_SAVINGS));
                ui.strong(format_currency(sym, s.total_energy_savings));
                ui.label(txt(keys::SUMMARY_NET_BENEFIT));
                ui.strong(format_currency(sym, s.net_benefit));
                ui.end_row();
                ui.label(txt(keys::SUMMARY_BREAK_EVEN));
                let be = format_break_even(&self.tr, s.break_even);
                match s.break_even {
                    BreakEven::Year(_) => ui.strong(be),
                    BreakEven::NotWithinHorizon => ui.colored_label(egui::Color32::LIGHT_RED, be),
                };
                ui.label(txt(keys::SUMMARY_ROI));
                ui.strong(format!("{:.1}%", s.roi_percent));
                ui.end_row();
                ui.label(txt(keys::SUMMARY_SYSTEM_SIZE));
                ui.strong(format!("{:.2} kW", s.system_size_kw));
                ui.label(txt(keys::SUMMARY_FIRST_YEAR_PRODUCTION));
                ui.strong(format!(
                    "{} ({:.0}%)",
                    format_energy(s.first_year_production_kwh),
                    s.usage_offset_percent
                ));
                ui.end_row();
                if let Some(loan) = s.loan {
                    ui.label(txt(keys::SUMMARY_MONTHLY_PAYMENT));
                    ui.strong(format!(
                        "{} ({:.2}%)",
                        format_currency(sym, loan.monthly_payment),
                        loan.annual_rate_percent
                    ));
                    ui.label(txt(keys::SUMMARY_TOTAL_INTEREST));
                    ui.strong(format_currency(sym, loan.total_interest));
                    ui.end_row();
                }
            });
    }

    /// 누적 편익 막대 그래프. 0 기준선 위는 초록, 아래는 빨강.
    fn cumulative_chart_ui(&self, ui: &mut egui::Ui) {
        let rows = &self.projection.rows;
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 140.0),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        let max = rows.iter().map(|r| r.cumulative_benefit).fold(0.0_f64, f64::max);
        let min = rows.iter().map(|r| r.cumulative_benefit).fold(0.0_f64, f64::min);
        let span = (max - min).max(1.0);
        let zero_y = rect.top() + rect.height() * (max / span) as f32;
        let bar_w = rect.width() / rows.len().max(1) as f32;
        for (i, row) in rows.iter().enumerate() {
            let x0 = rect.left() + i as f32 * bar_w + 1.0;
            let h = rect.height() * (row.cumulative_benefit.abs() / span) as f32;
            let (top, bottom, color) = if row.cumulative_benefit >= 0.0 {
                (zero_y - h, zero_y, egui::Color32::from_rgb(80, 170, 90))
            } else {
                (zero_y, zero_y + h, egui::Color32::from_rgb(200, 80, 70))
            };
            painter.rect_filled(
                egui::Rect::from_min_max(egui::pos2(x0, top), egui::pos2(x0 + bar_w - 2.0, bottom)),
                0.0,
                color,
            );
        }
        painter.hline(rect.x_range(), zero_y, egui::Stroke::new(1.0, egui::Color32::GRAY));
    }

    fn projection_table_ui(&self, ui: &mut egui::Ui) {
        let txt = |key: &str| self.tr.t(key).into_owned();
        let sym = self.config.currency_symbol.as_str();
        egui::Grid::new("projection_grid")
            .num_columns(6)
            .striped(true)
            .show(ui, |ui| {
                for key in [
                    keys::TABLE_YEAR,
                    keys::TABLE_PRODUCTION,
                    keys::TABLE_RATE,
                    keys::TABLE_VALUE,
                    keys::TABLE_LOAN,
                    keys::TABLE_CUMULATIVE,
                ] {
                    ui.strong(txt(key));
                }
                ui.end_row();
                for row in &self.projection.rows {
                    ui.label(row.year.to_string());
                    ui.label(format!("{:.0}", row.production_kwh));
                    ui.label(format!("{:.4}", row.electricity_rate));
                    ui.label(format_currency(sym, row.energy_value));
                    ui.label(format_currency(sym, row.loan_payment));
                    ui.label(format_currency(sym, row.cumulative_benefit));
                    ui.end_row();
                }
            });
    }

    fn amortization_table_ui(&self, ui: &mut egui::Ui) {
        let txt = |key: &str| self.tr.t(key).into_owned();
        if self.projection.amortization.is_empty() {
            ui.label(txt(keys::GUI_NO_LOAN));
            return;
        }
        let sym = self.config.currency_symbol.as_str();
        egui::Grid::new("amortization_grid")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                for key in [
                    keys::TABLE_YEAR,
                    keys::TABLE_PRINCIPAL,
                    keys::TABLE_INTEREST,
                    keys::TABLE_BALANCE,
                ] {
                    ui.strong(txt(key));
                }
                ui.end_row();
                for y in &self.projection.amortization {
                    ui.label(y.year.to_string());
                    ui.label(format_currency(sym, y.principal_paid));
                    ui.label(format_currency(sym, y.interest_paid));
                    ui.label(format_currency(sym, y.remaining_balance));
                    ui.end_row();
                }
            });
    }
}

fn equipment_ui<F>(ui: &mut egui::Ui, txt: &F, id: &str, title_key: &str, eq: &mut EquipmentPricing)
where
    F: Fn(&str) -> String,
{
    ui.label(egui::RichText::new(txt(title_key)).strong());
    egui::Grid::new(id).num_columns(2).show(ui, |ui| {
        ui.label(txt(keys::PROMPT_QUANTITY));
        ui.add(egui::DragValue::new(&mut eq.quantity).clamp_range(0..=10_000));
        ui.end_row();
        ui.label(txt(keys::PROMPT_PRICING_MODE));
        ui.horizontal(|ui| {
            ui.selectable_value(&mut eq.mode, PricingMode::PerUnit, txt(keys::GUI_MODE_PER_UNIT));
            ui.selectable_value(&mut eq.mode, PricingMode::Bulk, txt(keys::GUI_MODE_BULK));
        });
        ui.end_row();
        match eq.mode {
            PricingMode::PerUnit => {
                ui.label(txt(keys::PROMPT_UNIT_COST));
                ui.add(egui::DragValue::new(&mut eq.unit_cost).speed(5.0));
                ui.end_row();
            }
            PricingMode::Bulk => {
                ui.label(txt(keys::PROMPT_BULK_COST));
                ui.add(egui::DragValue::new(&mut eq.bulk_cost).speed(50.0));
                ui.end_row();
                ui.label(txt(keys::PROMPT_BULK_COUNT));
                ui.add(egui::DragValue::new(&mut eq.bulk_count).clamp_range(0..=10_000));
                ui.end_row();
            }
        }
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = move |key: &str| tr.t(key).into_owned();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt(keys::APP_TITLE));
                ui.separator();
                if ui.button(txt(keys::GUI_SAVE_BUTTON)).clicked() {
                    self.save_config();
                }
                if ui.button(txt(keys::GUI_EXPORT_BUTTON)).clicked() {
                    self.export_json();
                }
                if ui.button(txt(keys::GUI_RESET_BUTTON)).clicked() {
                    self.config.system = SystemConfiguration::default();
                }
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.small(status);
                }
            });
        });

        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.inputs_ui(ui));
            });

        // 입력이 바뀐 프레임에서 즉시 전체 재계산
        self.refresh_projection();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(txt(keys::SUMMARY_HEADING).trim());
            self.summary_ui(ui);
            ui.add_space(8.0);
            self.cumulative_chart_ui(ui);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Projection, txt(keys::GUI_TAB_PROJECTION));
                ui.selectable_value(&mut self.tab, Tab::Amortization, txt(keys::GUI_TAB_AMORTIZATION));
            });
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Projection => self.projection_table_ui(ui),
                Tab::Amortization => self.amortization_table_ui(ui),
            });
        });
    }
}
