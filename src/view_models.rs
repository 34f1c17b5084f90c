// src/view_models.rs

use crate::model::{Course, QuestionKind};
use crate::tree::{Level, NodePath};

/// Fila aplanada del esquema del curso, lista para pintar en el árbol,
/// el resumen y la vista previa.
#[derive(Clone, Debug)]
pub struct OutlineRow {
    pub path: NodePath,
    pub level: Level,
    pub title: String,
    pub child_count: usize,
}

impl OutlineRow {
    pub fn label(&self) -> String {
        let title = if self.title.trim().is_empty() {
            "(sin título)"
        } else {
            self.title.as_str()
        };
        if self.child_count > 0 {
            format!("{} {} ({})", self.level.icon(), title, self.child_count)
        } else {
            format!("{} {}", self.level.icon(), title)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CourseStats {
    pub chapters: usize,
    pub lessons: usize,
    pub quizzes: usize,
    pub questions: usize,
}

/// Aplana la jerarquía en orden de reproducción. Las claves de cada fila
/// siguen el mismo convenio posicional que usa el reductor.
pub fn flatten_course(course: &Course) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    for (ci, chapter) in course.chapters.iter().enumerate() {
        let c_path = NodePath::new(vec![ci]).expect("camino de capítulo");
        rows.push(OutlineRow {
            path: c_path.clone(),
            level: Level::Chapter,
            title: chapter.title.clone(),
            child_count: chapter.lessons.len(),
        });
        for (li, lesson) in chapter.lessons.iter().enumerate() {
            let l_path = c_path.child(li).expect("camino de lección");
            rows.push(OutlineRow {
                path: l_path.clone(),
                level: Level::Lesson,
                title: lesson.title.clone(),
                child_count: lesson.quizzes.len(),
            });
            for (qi, quiz) in lesson.quizzes.iter().enumerate() {
                let q_path = l_path.child(qi).expect("camino de cuestionario");
                rows.push(OutlineRow {
                    path: q_path.clone(),
                    level: Level::Quiz,
                    title: quiz.title.clone(),
                    child_count: quiz.questions.len(),
                });
                for (ni, question) in quiz.questions.iter().enumerate() {
                    rows.push(OutlineRow {
                        path: q_path.child(ni).expect("camino de pregunta"),
                        level: Level::Question,
                        title: question.title.clone(),
                        child_count: 0,
                    });
                }
            }
        }
    }
    rows
}

pub fn course_stats(course: &Course) -> CourseStats {
    let mut stats = CourseStats {
        chapters: course.chapters.len(),
        ..Default::default()
    };
    for chapter in &course.chapters {
        stats.lessons += chapter.lessons.len();
        for lesson in &chapter.lessons {
            stats.quizzes += lesson.quizzes.len();
            for quiz in &lesson.quizzes {
                stats.questions += quiz.questions.len();
            }
        }
    }
    stats
}

/// Problemas estructurales que bloquean la publicación. Se listan en el
/// paso de revisión del asistente.
pub fn validation_issues(course: &Course) -> Vec<String> {
    let mut issues = Vec::new();
    if course.title.trim().is_empty() {
        issues.push("El curso no tiene título.".to_owned());
    }
    if course.chapters.is_empty() {
        issues.push("El curso no tiene ningún capítulo.".to_owned());
    }
    for (ci, chapter) in course.chapters.iter().enumerate() {
        if chapter.title.trim().is_empty() {
            issues.push(format!("El capítulo {} no tiene título.", ci + 1));
        }
        if chapter.lessons.is_empty() {
            issues.push(format!(
                "El capítulo {} no tiene ninguna lección.",
                ci + 1
            ));
        }
        for (li, lesson) in chapter.lessons.iter().enumerate() {
            if lesson.title.trim().is_empty() {
                issues.push(format!(
                    "La lección {}.{} no tiene título.",
                    ci + 1,
                    li + 1
                ));
            }
            for (qi, quiz) in lesson.quizzes.iter().enumerate() {
                for (ni, question) in quiz.questions.iter().enumerate() {
                    if question.kind == QuestionKind::Choice
                        && !question.options.iter().any(|o| o.is_correct)
                    {
                        issues.push(format!(
                            "La pregunta {}.{}.{}.{} no marca ninguna opción correcta.",
                            ci + 1,
                            li + 1,
                            qi + 1,
                            ni + 1
                        ));
                    }
                }
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Chapter, Lesson, Question, Quiz};

    fn sample_course() -> Course {
        Course {
            title: "Rust desde cero".into(),
            chapters: vec![Chapter {
                title: "Introducción".into(),
                lessons: vec![Lesson {
                    title: "Hola mundo".into(),
                    quizzes: vec![Quiz {
                        title: "Repaso".into(),
                        questions: vec![Question {
                            title: "¿Qué imprime?".into(),
                            options: vec![AnswerOption {
                                content: "Hola".into(),
                                is_correct: true,
                                ..Default::default()
                            }],
                            ..Default::default()
                        }],
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn flatten_emits_rows_in_play_order() {
        let rows = flatten_course(&sample_course());
        let keys: Vec<String> = rows.iter().map(|r| r.path.to_string()).collect();
        assert_eq!(keys, ["0", "0-0", "0-0-0", "0-0-0-0"]);
        assert_eq!(rows[0].level, Level::Chapter);
        assert_eq!(rows[3].level, Level::Question);
    }

    #[test]
    fn stats_count_every_level() {
        let stats = course_stats(&sample_course());
        assert_eq!(
            stats,
            CourseStats {
                chapters: 1,
                lessons: 1,
                quizzes: 1,
                questions: 1
            }
        );
    }

    #[test]
    fn validation_flags_choice_without_correct_option() {
        let mut course = sample_course();
        course.chapters[0].lessons[0].quizzes[0].questions[0].options[0].is_correct = false;
        let issues = validation_issues(&course);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("opción correcta"));
    }

    #[test]
    fn validation_accepts_a_complete_course() {
        assert!(validation_issues(&sample_course()).is_empty());
    }
}
