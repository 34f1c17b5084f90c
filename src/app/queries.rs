use crate::model::{Chapter, Course, Lesson, Question, Quiz};
use crate::tree::{Level, NodePath};

// Accesores tipados por nivel. Todos fallan con `None` ante un camino de
// profundidad equivocada o un índice fuera de rango.

pub fn chapter_at<'a>(course: &'a Course, path: &NodePath) -> Option<&'a Chapter> {
    match path.segments() {
        [c] => course.chapters.get(*c),
        _ => None,
    }
}

pub fn chapter_at_mut<'a>(course: &'a mut Course, path: &NodePath) -> Option<&'a mut Chapter> {
    match path.segments() {
        [c] => course.chapters.get_mut(*c),
        _ => None,
    }
}

pub fn lesson_at<'a>(course: &'a Course, path: &NodePath) -> Option<&'a Lesson> {
    match path.segments() {
        [c, l] => course.chapters.get(*c)?.lessons.get(*l),
        _ => None,
    }
}

pub fn lesson_at_mut<'a>(course: &'a mut Course, path: &NodePath) -> Option<&'a mut Lesson> {
    match path.segments() {
        [c, l] => course.chapters.get_mut(*c)?.lessons.get_mut(*l),
        _ => None,
    }
}

pub fn quiz_at<'a>(course: &'a Course, path: &NodePath) -> Option<&'a Quiz> {
    match path.segments() {
        [c, l, q] => course.chapters.get(*c)?.lessons.get(*l)?.quizzes.get(*q),
        _ => None,
    }
}

pub fn quiz_at_mut<'a>(course: &'a mut Course, path: &NodePath) -> Option<&'a mut Quiz> {
    match path.segments() {
        [c, l, q] => course
            .chapters
            .get_mut(*c)?
            .lessons
            .get_mut(*l)?
            .quizzes
            .get_mut(*q),
        _ => None,
    }
}

pub fn question_at<'a>(course: &'a Course, path: &NodePath) -> Option<&'a Question> {
    match path.segments() {
        [c, l, q, n] => course
            .chapters
            .get(*c)?
            .lessons
            .get(*l)?
            .quizzes
            .get(*q)?
            .questions
            .get(*n),
        _ => None,
    }
}

pub fn question_at_mut<'a>(course: &'a mut Course, path: &NodePath) -> Option<&'a mut Question> {
    match path.segments() {
        [c, l, q, n] => course
            .chapters
            .get_mut(*c)?
            .lessons
            .get_mut(*l)?
            .quizzes
            .get_mut(*q)?
            .questions
            .get_mut(*n),
        _ => None,
    }
}

/// Título del nodo en `path`, sea del nivel que sea. `None` si el camino
/// ya no resuelve (p.ej. tras un movimiento o un borrado).
pub fn node_title(course: &Course, path: &NodePath) -> Option<String> {
    match path.level() {
        Level::Chapter => chapter_at(course, path).map(|c| c.title.clone()),
        Level::Lesson => lesson_at(course, path).map(|l| l.title.clone()),
        Level::Quiz => quiz_at(course, path).map(|q| q.title.clone()),
        Level::Question => question_at(course, path).map(|q| q.title.clone()),
    }
}

/// Número de hijos directos del nodo. Para decidir si un borrado necesita
/// confirmación (arrastra todo el subárbol).
pub fn child_count(course: &Course, path: &NodePath) -> Option<usize> {
    match path.level() {
        Level::Chapter => chapter_at(course, path).map(|c| c.lessons.len()),
        Level::Lesson => lesson_at(course, path).map(|l| l.quizzes.len()),
        Level::Quiz => quiz_at(course, path).map(|q| q.questions.len()),
        Level::Question => question_at(course, path).map(|_| 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Course {
        let mut course = Course {
            title: "T".into(),
            ..Default::default()
        };
        course.chapters.push(Chapter {
            title: "Cap".into(),
            lessons: vec![Lesson {
                title: "Lec".into(),
                quizzes: vec![Quiz {
                    title: "Quiz".into(),
                    questions: vec![Question {
                        title: "Preg".into(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        });
        course
    }

    fn path(key: &str) -> NodePath {
        NodePath::parse(key).unwrap()
    }

    #[test]
    fn accessors_resolve_each_level() {
        let course = sample();
        assert_eq!(chapter_at(&course, &path("0")).unwrap().title, "Cap");
        assert_eq!(lesson_at(&course, &path("0-0")).unwrap().title, "Lec");
        assert_eq!(quiz_at(&course, &path("0-0-0")).unwrap().title, "Quiz");
        assert_eq!(
            question_at(&course, &path("0-0-0-0")).unwrap().title,
            "Preg"
        );
    }

    #[test]
    fn accessors_reject_wrong_depth_or_range() {
        let course = sample();
        assert!(chapter_at(&course, &path("0-0")).is_none());
        assert!(lesson_at(&course, &path("0-5")).is_none());
        assert!(question_at(&course, &path("0-0-0-9")).is_none());
    }

    #[test]
    fn node_title_works_across_levels() {
        let course = sample();
        assert_eq!(node_title(&course, &path("0-0")).unwrap(), "Lec");
        assert_eq!(child_count(&course, &path("0")).unwrap(), 1);
        assert_eq!(child_count(&course, &path("0-0-0-0")).unwrap(), 0);
    }
}
