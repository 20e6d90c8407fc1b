use dioxus::prelude::*;

use crate::domain::{format_fixed, parse_number, parse_slider, Currency, ParamField, Timeframe};

#[component]
fn FieldLabel(field: ParamField) -> Element {
    rsx! {
        label { class: "field-label", title: "{field.help()}", "{field.label()}" }
    }
}

/// Integer slider bounded by the field's range. The current value is echoed
/// under the control with `unit` appended.
#[component]
pub fn SliderField(
    field: ParamField,
    value: f64,
    onchange: EventHandler<f64>,
    #[props(default)] unit: &'static str,
) -> Element {
    let Some(range) = field.slider_range() else {
        return rsx! { NumberField { field, value, onchange } };
    };
    let (min, max) = (*range.start(), *range.end());

    rsx! {
        div { class: "field",
            FieldLabel { field }
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    if let Some(next) = parse_slider(&evt.value()) {
                        onchange.call(f64::from(next.clamp(min, max)));
                    }
                },
            }
            span { class: "field-value", "{format_fixed(value, 0)}{unit}" }
        }
    }
}

/// Free-form number input. The text is kept as typed; what it parses to,
/// `NaN` included, is handed to `onchange`.
#[component]
pub fn NumberField(field: ParamField, value: f64, onchange: EventHandler<f64>) -> Element {
    let mut text = use_signal(move || initial_text(value));

    rsx! {
        div { class: "field",
            FieldLabel { field }
            input {
                r#type: "number",
                value: "{text}",
                oninput: move |evt: FormEvent| {
                    let raw = evt.value();
                    onchange.call(parse_number(&raw));
                    text.set(raw);
                },
            }
        }
    }
}

fn initial_text(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

#[component]
pub fn TimeframeField(value: Timeframe, onchange: EventHandler<Timeframe>) -> Element {
    rsx! {
        div { class: "field",
            FieldLabel { field: ParamField::Timeframe }
            select {
                value: "{value.months()}",
                onchange: move |evt: FormEvent| {
                    let picked = evt.value().parse::<u32>().ok().and_then(Timeframe::from_months);
                    if let Some(timeframe) = picked {
                        onchange.call(timeframe);
                    }
                },
                for timeframe in Timeframe::ALL {
                    option {
                        value: "{timeframe.months()}",
                        selected: timeframe == value,
                        "{timeframe.label()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn CurrencyField(value: Currency, onchange: EventHandler<Currency>) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "Currency" }
            select {
                value: "{value.symbol()}",
                onchange: move |evt: FormEvent| {
                    if let Some(currency) = Currency::from_symbol(&evt.value()) {
                        onchange.call(currency);
                    }
                },
                for currency in Currency::ALL {
                    option {
                        value: "{currency.symbol()}",
                        selected: currency == value,
                        "{currency.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_start_blank() {
        assert_eq!(initial_text(60.0), "60");
        assert_eq!(initial_text(0.5), "0.5");
        assert_eq!(initial_text(f64::NAN), "");
    }
}
