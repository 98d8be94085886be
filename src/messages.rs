//! User-facing text for every console program.
//!
//! Russian is the default.

use serde::Deserialize;

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

/// Message catalog for one [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub language: Language,
}

impl Messages {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn pick(&self, ru: &'static str, en: &'static str) -> &'static str {
        match self.language {
            Language::Ru => ru,
            Language::En => en,
        }
    }

    // -- strings --------------------------------------------------------------

    pub fn enter_string(&self) -> &'static str {
        self.pick("Введите строку: ", "Enter a string: ")
    }

    pub fn string_length(&self, length: usize) -> String {
        match self.language {
            Language::Ru => format!("Длина строки: {length} символов"),
            Language::En => format!("String length: {length} characters"),
        }
    }

    pub fn reversed_string(&self, reversed: &str) -> String {
        match self.language {
            Language::Ru => format!("Перевернутая строка: {reversed}"),
            Language::En => format!("Reversed string: {reversed}"),
        }
    }

    pub fn vowel_count(&self, vowels: usize) -> String {
        match self.language {
            Language::Ru => format!("Количество гласных букв: {vowels}"),
            Language::En => format!("Number of vowels: {vowels}"),
        }
    }

    // -- temperature menu -----------------------------------------------------

    pub fn menu_title(&self) -> &'static str {
        self.pick("Калькулятор температуры", "Temperature calculator")
    }

    pub fn menu_options(&self) -> [&'static str; 3] {
        match self.language {
            Language::Ru => [
                "1. Цельсий -> Фаренгейт",
                "2. Фаренгейт -> Цельсий",
                "3. Выход",
            ],
            Language::En => [
                "1. Celsius -> Fahrenheit",
                "2. Fahrenheit -> Celsius",
                "3. Exit",
            ],
        }
    }

    pub fn choose_action(&self) -> &'static str {
        self.pick("Выберите действие (1-3): ", "Choose an action (1-3): ")
    }

    pub fn enter_celsius(&self) -> &'static str {
        self.pick(
            "Введите температуру в градусах Цельсия: ",
            "Enter the temperature in degrees Celsius: ",
        )
    }

    pub fn enter_fahrenheit(&self) -> &'static str {
        self.pick(
            "Введите температуру в градусах Фаренгейта: ",
            "Enter the temperature in degrees Fahrenheit: ",
        )
    }

    pub fn invalid_choice(&self) -> &'static str {
        self.pick(
            "Неверный выбор. Пожалуйста, выберите 1, 2 или 3.",
            "Invalid choice. Please choose 1, 2 or 3.",
        )
    }

    pub fn invalid_temperature(&self, raw: &str) -> String {
        match self.language {
            Language::Ru => format!("Некорректное число: '{raw}'. Попробуйте ещё раз."),
            Language::En => format!("Not a number: '{raw}'. Please try again."),
        }
    }

    pub fn freezing(&self) -> &'static str {
        self.pick(
            "Вода замерзает при этой температуре!",
            "Water freezes at this temperature!",
        )
    }

    pub fn boiling(&self) -> &'static str {
        self.pick(
            "Вода кипит при этой температуре!",
            "Water boils at this temperature!",
        )
    }

    pub fn goodbye(&self) -> &'static str {
        self.pick("До свидания!", "Goodbye!")
    }

    // -- numbers --------------------------------------------------------------

    pub fn arithmetic_header(&self) -> &'static str {
        self.pick(
            "Демонстрация арифметических операций:",
            "Arithmetic operations demo:",
        )
    }

    pub fn circle_area(&self, radius: f64, area: f64) -> String {
        match self.language {
            Language::Ru => format!("Площадь круга с радиусом {radius:.1}: {area:.2}"),
            Language::En => format!("Area of a circle with radius {radius:.1}: {area:.2}"),
        }
    }

    pub fn overflow_header(&self) -> &'static str {
        self.pick(
            "Демонстрация переполнения u8:",
            "u8 overflow demo:",
        )
    }

    pub fn after_increment(&self) -> &'static str {
        self.pick("После x += 1 (wrapping)", "After x += 1 (wrapping)")
    }

    pub fn checked_overflow(&self) -> &'static str {
        self.pick(
            "checked_add(1) сообщает о переполнении",
            "checked_add(1) reports overflow",
        )
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
