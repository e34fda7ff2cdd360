//! Built-in historical dataset and JSON loading of period lists.

use serde::Deserialize;
use serde_json::Value;
use timeline_core::{Periods, TimelineConfig, TimelineError, TimelineEvent, TimelinePeriod};

struct StaticPeriod {
    label: &'static str,
    years: [i32; 2],
    events: &'static [(i32, &'static str, &'static str)],
}

const TIMELINE: &[StaticPeriod] = &[
    StaticPeriod {
        label: "Технологии",
        years: [1980, 1986],
        events: &[
            (1980, "Sinclair ZX80", "Выпущен домашний компьютер Sinclair ZX80 стоимостью менее 100 фунтов."),
            (1982, "Commodore 64", "Появился самый продаваемый восьмибитный компьютер в истории."),
            (1984, "Apple Macintosh", "Первый массовый компьютер с графическим интерфейсом и мышью."),
            (1985, "Windows 1.0", "Microsoft выпустила первую версию оболочки Windows для MS-DOS."),
            (1986, "Pixar", "Стив Джобс выкупил подразделение компьютерной графики Lucasfilm."),
        ],
    },
    StaticPeriod {
        label: "Кино",
        years: [1987, 1991],
        events: &[
            (1987, "Хищник", "Вышел фантастический боевик Джона Мактирнана."),
            (1988, "Кто подставил кролика Роджера", "Фильм соединил живые съёмки и классическую анимацию."),
            (1989, "Назад в будущее 2", "Продолжение культовой трилогии Роберта Земекиса."),
            (1990, "Крёстный отец 3", "Завершение саги Фрэнсиса Форда Копполы."),
            (1991, "Терминатор 2", "Новый уровень компьютерных визуальных эффектов в кино."),
        ],
    },
    StaticPeriod {
        label: "Литература",
        years: [1992, 1997],
        events: &[
            (1992, "Нобелевская премия", "Премию по литературе получил Дерек Уолкотт."),
            (1994, "Бессонница", "Опубликован роман Стивена Кинга."),
            (1995, "Нобелевская премия", "Премию по литературе получил Шеймас Хини."),
            (1997, "Гарри Поттер", "Вышла первая книга Джоан Роулинг о юном волшебнике."),
        ],
    },
    StaticPeriod {
        label: "Театр",
        years: [1999, 2004],
        events: &[
            (1999, "Юнона и Авось", "Премьера новой постановки рок-оперы в театре «Ленком»."),
            (2000, "Возвращение Элвиса", "Спектакль Театра на Таганке по мотивам американской культуры."),
            (2002, "Берег утопии", "Премьера трилогии Тома Стоппарда в Национальном театре Лондона."),
            (2003, "Волшебная лампа Аладдина", "Новогодний спектакль для детей в Малом театре."),
        ],
    },
    StaticPeriod {
        label: "Спорт",
        years: [2006, 2014],
        events: &[
            (2006, "Турин", "XX зимние Олимпийские игры прошли в Италии."),
            (2008, "Пекин", "Майкл Фелпс выиграл восемь золотых медалей на одних Играх."),
            (2010, "Ванкувер", "Канада впервые выиграла олимпийское золото на домашних Играх."),
            (2012, "Лондон", "Усэйн Болт защитил титулы на дистанциях 100 и 200 метров."),
            (2014, "Сочи", "XXII зимние Олимпийские игры впервые прошли в России."),
        ],
    },
    StaticPeriod {
        label: "Наука",
        years: [2015, 2022],
        events: &[
            (2015, "Гравитационные волны", "Детекторы LIGO впервые зарегистрировали гравитационные волны."),
            (2016, "Телескоп FAST", "В Китае завершено строительство крупнейшего радиотелескопа."),
            (2017, "Солнечное затмение", "Полное затмение наблюдалось по всей территории США."),
            (2019, "Чёрная дыра", "Телескоп горизонта событий получил первое изображение тени чёрной дыры."),
            (2021, "Джеймс Уэбб", "Запущен космический телескоп нового поколения."),
            (2022, "DART", "Зонд NASA изменил орбиту астероида Диморф."),
        ],
    },
];

/// The built-in dataset, in dial order.
pub fn timeline_data() -> Vec<TimelinePeriod> {
    TIMELINE
        .iter()
        .map(|period| TimelinePeriod {
            label: period.label.to_string(),
            years: period.years,
            events: period
                .events
                .iter()
                .map(|&(year, title, description)| TimelineEvent::new(year, title, description))
                .collect(),
        })
        .collect()
}

/// The built-in dataset, validated against `config`.
pub fn default_periods(config: &TimelineConfig) -> Result<Periods, TimelineError> {
    Periods::new(timeline_data(), config.reject_duplicate_keys)
}

/// Load periods from a JSON string.
pub fn periods_from_str(json: &str, config: &TimelineConfig) -> Result<Periods, TimelineError> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| TimelineError::Parse(err.to_string()))?;
    periods_from_value(&value, config)
}

/// Load periods from either a bare array or an object with a `periods`
/// array.
pub fn periods_from_value(value: &Value, config: &TimelineConfig) -> Result<Periods, TimelineError> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(map) => map.get("periods").ok_or_else(|| {
            TimelineError::Parse("expected a \"periods\" array in the document".to_string())
        })?,
        other => {
            return Err(TimelineError::Parse(format!(
                "expected an array of periods, found {}",
                json_kind(other)
            )))
        }
    };

    let periods = Vec::<TimelinePeriod>::deserialize(list)
        .map_err(|err| TimelineError::Parse(err.to_string()))?;

    for period in &periods {
        if period.start_year() > period.end_year() {
            log::warn!(
                "period {:?} ends ({}) before it starts ({})",
                period.label,
                period.end_year(),
                period.start_year()
            );
        }
    }
    log::debug!("loaded {} periods", periods.len());

    Periods::new(periods, config.reject_duplicate_keys)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
