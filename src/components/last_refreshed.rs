use chrono::{Local, Timelike};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

// Only the minute is shown, hour and date are not part of the indicator.
pub fn minute_label<T: Timelike>(now: &T) -> String {
    now.minute().to_string()
}

#[function_component]
pub fn LastRefreshed() -> Html {
    let minute = use_state(|| minute_label(&Local::now()));

    {
        let minute = minute.clone();
        use_interval(
            move || minute.set(minute_label(&Local::now())),
            config::REFRESH_INTERVAL_MS,
        );
    }

    html! {
        <span id="lastRefreshed">{(*minute).clone()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn shows_minutes_without_padding() {
        let time = NaiveTime::from_hms_opt(14, 7, 59).unwrap();
        assert_eq!(minute_label(&time), "7");
    }

    #[test]
    fn ignores_hour() {
        let morning = NaiveTime::from_hms_opt(9, 42, 0).unwrap();
        let evening = NaiveTime::from_hms_opt(21, 42, 30).unwrap();
        assert_eq!(minute_label(&morning), minute_label(&evening));
    }
}
