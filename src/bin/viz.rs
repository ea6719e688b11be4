use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use balloon_sim::{simulate, AscentResult, FlightParams, Registry};

fn main() -> eframe::Result {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let params = FlightParams { payload: 1.05, ..FlightParams::default() };
    let result = match simulate(&params, &Registry::standard()) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(i32::from(e.exit_code()));
        }
    };

    let app = BalloonViz { params, result };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Sounding Balloon Flight", options, Box::new(|_| Ok(Box::new(app))))
}

struct BalloonViz {
    params: FlightParams,
    result: AscentResult,
}

impl eframe::App for BalloonViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let samples = self.result.samples();
        let step = (samples.len() / 2000).max(1);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!(
                "Balloon flight (m = {} kg; Ø = {} m, payload {} kg)",
                self.params.envelope_mass, self.params.diameter, self.params.payload
            ));
            ui.label(format!(
                "Max altitude {:.1} km reached after {:.0} min  |  Exit: {}",
                self.result.apex_altitude / 1000.0,
                self.result.time_to_apex / 60.0,
                self.result.exit_status,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Altitude vs Time
                ui.vertical(|ui| {
                    ui.label("Altitude (km)");
                    let points: PlotPoints = samples.iter()
                        .step_by(step)
                        .map(|s| [s.time / 60.0, s.altitude / 1000.0])
                        .collect();
                    Plot::new("altitude")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("Time (min)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude", points));
                        });
                });

                // Velocity vs Time
                ui.vertical(|ui| {
                    ui.label("Velocity (m/s)");
                    let points: PlotPoints = samples.iter()
                        .step_by(step)
                        .map(|s| [s.time / 60.0, s.velocity])
                        .collect();
                    Plot::new("velocity")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("Time (min)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Velocity", points));
                        });
                });
            });
        });
    }
}
