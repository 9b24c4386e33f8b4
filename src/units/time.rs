use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 초이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// 셀렉터에 노출되는 순서.
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
    ];

    /// 화면 표시용 라벨.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Second => "second (s)",
            TimeUnit::Minute => "minute (min)",
            TimeUnit::Hour => "hour (h)",
            TimeUnit::Day => "day",
        }
    }
}

fn to_second(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value,
        TimeUnit::Minute => value * 60.0,
        TimeUnit::Hour => value * 3600.0,
        TimeUnit::Day => value * 86400.0,
    }
}

fn from_second(value_s: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value_s,
        TimeUnit::Minute => value_s / 60.0,
        TimeUnit::Hour => value_s / 3600.0,
        TimeUnit::Day => value_s / 86400.0,
    }
}

/// 시간을 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    let s = to_second(value, from);
    from_second(s, to)
}
