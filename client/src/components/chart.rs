//! `<canvas>` host for a Chart.js chart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chart.js is loaded as a global script by the shell. The component turns a
//! [`ChartSpec`] into a live chart: the JSON config goes through `JSON.parse`,
//! the fill gradient is painted on the canvas context, and the tooltip label
//! callback is a Rust closure kept alive next to the chart. A new spec
//! destroys the old chart and builds a fresh one.

use leptos::prelude::*;

use crate::util::chart::ChartSpec;

#[component]
pub fn ChartCanvas(id: &'static str, #[prop(into)] spec: Signal<ChartSpec>) -> impl IntoView {
    let canvas = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let live = StoredValue::new_local(None::<binding::LiveChart>);
        Effect::new(move |_| {
            let spec = spec.get();
            let Some(canvas) = canvas.get() else {
                return;
            };
            live.update_value(|slot| {
                if let Some(old) = slot.take() {
                    old.destroy();
                }
                match binding::LiveChart::create(&canvas, &spec) {
                    Ok(chart) => *slot = Some(chart),
                    Err(e) => tracing::warn!(canvas = id, error = ?e, "chart could not be created"),
                }
            });
        });
        on_cleanup(move || {
            live.update_value(|slot| {
                if let Some(old) = slot.take() {
                    old.destroy();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = spec;

    view! {
        <div class="chart-container">
            <canvas id=id node_ref=canvas></canvas>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod binding {
    use std::sync::Once;

    use js_sys::{Array, Function, JSON, Object, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::util::chart::{ChartSpec, GRADIENT_HEIGHT, TooltipLabel, chart_defaults, gradient_stops};

    static DEFAULTS: Once = Once::new();

    type LabelCallback = Closure<dyn Fn(JsValue) -> JsValue>;

    pub struct LiveChart {
        chart: JsValue,
        _label: LabelCallback,
    }

    impl LiveChart {
        pub fn create(canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<Self, JsValue> {
            let ctor: Function = Reflect::get(&js_sys::global(), &"Chart".into())?.dyn_into()?;
            DEFAULTS.call_once(|| {
                if let Err(e) = apply_defaults(&ctor) {
                    tracing::warn!(error = ?e, "chart defaults not applied");
                }
            });

            let config = JSON::parse(&spec.config.to_string())?;
            if let Some(color) = &spec.gradient {
                paint_gradient(canvas, &config, color)?;
            }
            let label = label_callback(spec.tooltip);
            let callbacks = path(&config, &["options", "plugins", "tooltip", "callbacks"])?;
            Reflect::set(&callbacks, &"label".into(), label.as_ref())?;

            let chart = Reflect::construct(&ctor, &Array::of2(canvas, &config))?;
            Ok(Self { chart, _label: label })
        }

        pub fn destroy(self) {
            let destroy = Reflect::get(&self.chart, &"destroy".into()).and_then(|d| d.dyn_into::<Function>());
            if let Ok(destroy) = destroy {
                if let Err(e) = destroy.call0(&self.chart) {
                    tracing::warn!(error = ?e, "chart destroy failed");
                }
            }
        }
    }

    fn apply_defaults(ctor: &Function) -> Result<(), JsValue> {
        let defaults = Reflect::get(ctor, &"defaults".into())?;
        let overrides = JSON::parse(&chart_defaults().to_string())?;
        merge(&defaults, &overrides)
    }

    /// Deep-assign `src` onto `dst`, keeping keys `src` does not name.
    fn merge(dst: &JsValue, src: &JsValue) -> Result<(), JsValue> {
        for key in Object::keys(src.unchecked_ref()).iter() {
            let value = Reflect::get(src, &key)?;
            let current = Reflect::get(dst, &key)?;
            if value.is_object() && current.is_object() && !Array::is_array(&value) {
                merge(&current, &value)?;
            } else {
                Reflect::set(dst, &key, &value)?;
            }
        }
        Ok(())
    }

    /// Object at `keys` under `root`, creating empty objects on the way.
    fn path(root: &JsValue, keys: &[&str]) -> Result<JsValue, JsValue> {
        let mut node = root.clone();
        for key in keys {
            let key = JsValue::from_str(key);
            let mut next = Reflect::get(&node, &key)?;
            if !next.is_object() {
                next = Object::new().into();
                Reflect::set(&node, &key, &next)?;
            }
            node = next;
        }
        Ok(node)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn paint_gradient(canvas: &HtmlCanvasElement, config: &JsValue, color: &str) -> Result<(), JsValue> {
        let Some(context) = canvas.get_context("2d")? else {
            return Ok(());
        };
        let context: CanvasRenderingContext2d = context.dyn_into()?;
        let gradient = context.create_linear_gradient(0.0, 0.0, 0.0, GRADIENT_HEIGHT);
        for (offset, stop) in gradient_stops(color) {
            gradient.add_color_stop(offset as f32, &stop)?;
        }
        let datasets = path(config, &["data"]).and_then(|data| Reflect::get(&data, &"datasets".into()))?;
        let first = Reflect::get_u32(&datasets, 0)?;
        if first.is_object() {
            Reflect::set(&first, &"backgroundColor".into(), &gradient)?;
        }
        Ok(())
    }

    fn label_callback(tooltip: TooltipLabel) -> LabelCallback {
        Closure::new(move |context: JsValue| {
            let series = Reflect::get(&context, &"dataset".into())
                .and_then(|d| Reflect::get(&d, &"label".into()))
                .ok()
                .and_then(|l| l.as_string())
                .unwrap_or_default();
            let y = Reflect::get(&context, &"parsed".into())
                .and_then(|p| Reflect::get(&p, &"y".into()))
                .ok()
                .and_then(|y| y.as_f64())
                .unwrap_or_default();
            JsValue::from_str(&tooltip.format(&series, y))
        })
    }
}
