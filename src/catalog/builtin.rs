//! Built-in project maturity catalog

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::types::{Catalog, Question, Section};

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(build()));

/// Shared handle to the built-in catalog
pub fn builtin() -> Arc<Catalog> {
    Arc::clone(&BUILTIN)
}

fn section(title: &str, entries: &[(&str, &str)]) -> Section {
    Section::new(
        title,
        entries
            .iter()
            .map(|(prompt, gap)| Question::new(*prompt, *gap))
            .collect(),
    )
}

fn build() -> Catalog {
    let development = section(
        "Зрелость процессов разработки",
        &[
            ("Есть ли формальный процесс управления требованиями?", "управления требованиями"),
            ("Составляется ли подробный план проекта/итераций?", "планирования проекта"),
            ("Проводится ли регулярная идентификация и анализ рисков проекта?", "анализа рисков"),
            ("Используются ли системы контроля версий?", "контроля версий"),
            ("Существует ли регламентированный процесс выпуска релизов?", "процесса релизов"),
            ("Автоматизированы ли процессы сборки, тестирования и развертывания?", "автоматизации CI/CD"),
        ],
    );

    let qa = section(
        "Зрелость процессов QA",
        &[
            ("Сформулирована ли стратегия тестирования?", "стратегии тестирования"),
            ("Проводится ли планирование тестирования?", "планирования тестирования"),
            ("Отслеживается ли прогресс тестирования?", "мониторинга и отчетности"),
            ("Используются ли методики дизайна тестов?", "методик тест-дизайна"),
            ("Есть ли стабильная тестовая среда?", "тестовой среды"),
            ("Участвует ли QA в ранних этапах проекта?", "раннего вовлечения QA"),
            ("Проводится ли нефункциональное тестирование?", "нефункционального тестирования"),
            ("Собираются ли метрики качества?", "метрик качества"),
            ("Проводится ли обучение QA команды?", "обучения команды QA"),
            ("Проводятся ли peer-review тест-кейсов?", "peer-review тест-кейсов"),
        ],
    );

    let testing = section(
        "Квалификация команды тестирования",
        &[
            ("Удалось ли избежать критичных дефектов в продакшене?", "устранения критичных дефектов"),
            (">80% дефектов выявляется до релиза?", "раннего обнаружения дефектов"),
            ("Доля дефектов после релиза < 10%?", "низкой утечки дефектов"),
            ("Все требования покрыты тестами?", "покрытия требований тестами"),
            ("Есть автоматизированное регрессионное тестирование?", "автоматизации регрессионного тестирования"),
            ("Время на исправление дефектов < 3 дней?", "быстрого устранения дефектов"),
            ("Не возникает ли много регрессий?", "предотвращения регрессий"),
        ],
    );

    let risks = section(
        "Риски проекта",
        &[
            ("Понятны и стабильны ли требования?", "неясные требования"),
            ("Сроки проекта реалистичны?", "нереалистичные сроки"),
            ("Достаточно ресурсов и бюджета?", "недостаток ресурсов"),
            ("Команда обладает нужной экспертизой?", "недостаток экспертизы"),
            ("Используются проверенные технологии?", "новые/неизвестные технологии"),
            ("Нет критичных внешних зависимостей?", "зависимость от внешних поставщиков"),
            ("Коммуникация в команде эффективна?", "проблемы коммуникации"),
            ("Учитываются ли требования по безопасности?", "неучтенные требования по безопасности"),
        ],
    );

    Catalog::new(vec![development, qa, testing, risks])
        .unwrap_or_else(|e| unreachable!("built-in catalog is invalid: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let catalog = builtin();
        let sizes: Vec<usize> = catalog.iter().map(Section::len).collect();
        assert_eq!(sizes, vec![6, 10, 7, 8]);
        assert_eq!(catalog.total_questions(), 31);
    }

    #[test]
    fn test_builtin_every_question_has_gap() {
        let catalog = builtin();
        assert!(catalog
            .iter()
            .flat_map(|s| s.questions.iter())
            .all(|q| q.gap.is_some()));
    }

    #[test]
    fn test_builtin_titles() {
        let catalog = builtin();
        let titles: Vec<&str> = catalog.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Зрелость процессов разработки",
                "Зрелость процессов QA",
                "Квалификация команды тестирования",
                "Риски проекта",
            ]
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = builtin();
        let b = builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_builtin_gap_alignment() {
        let catalog = builtin();
        let q = catalog.question(0, 5).unwrap();
        assert!(q.prompt.starts_with("Автоматизированы"));
        assert_eq!(q.gap.as_deref(), Some("автоматизации CI/CD"));

        let q = catalog.question(3, 7).unwrap();
        assert_eq!(q.gap.as_deref(), Some("неучтенные требования по безопасности"));
    }
}
