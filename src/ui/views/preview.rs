use crate::app::StudioApp;
use crate::model::{LessonKind, QuestionKind};
use egui::{Context, RichText, ScrollArea};
use egui_commonmark::CommonMarkViewer;

/// Vista previa del curso tal y como lo vería un alumno, en orden de
/// reproducción. Trabaja sobre el curso en vivo, no sobre el esquema
/// cacheado, para que los cambios recién tecleados se vean al instante.
pub fn ui_preview(app: &mut StudioApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("👁 Vista previa");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut app.show_answers_in_preview, "Mostrar respuestas");
            });
        });
        let stats = &app.outline_stats;
        ui.weak(format!(
            "{} capítulos · {} lecciones · {} cuestionarios · {} preguntas",
            stats.chapters, stats.lessons, stats.quizzes, stats.questions
        ));
        ui.separator();

        // Préstamos disjuntos: el visor de markdown necesita la caché
        // mutable mientras se recorre el curso
        let StudioApp {
            course,
            cm_cache,
            show_answers_in_preview,
            ..
        } = app;
        let show_answers = *show_answers_in_preview;

        ScrollArea::vertical().show(ui, |ui| {
            if course.chapters.is_empty() {
                ui.weak("El curso aún no tiene capítulos.");
                return;
            }

            ui.heading(&course.title);
            if !course.description.is_empty() {
                ui.label(&course.description);
            }
            ui.add_space(8.0);

            for (c_ix, chapter) in course.chapters.iter().enumerate() {
                ui.heading(format!("📚 {}. {}", c_ix + 1, chapter.title));
                for lesson in &chapter.lessons {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} {}", lesson.kind.label(), lesson.title))
                            .strong(),
                    );
                    if let Some(name) = &lesson.media_name {
                        ui.weak(format!("📎 {name}"));
                    }
                    if lesson.kind == LessonKind::Document && !lesson.body.is_empty() {
                        CommonMarkViewer::new().show(ui, cm_cache, &lesson.body);
                    }
                    for quiz in &lesson.quizzes {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("📝 {}", quiz.title)).italics());
                        for (q_ix, question) in quiz.questions.iter().enumerate() {
                            ui.label(format!("{}. {}", q_ix + 1, question.title));
                            match question.kind {
                                QuestionKind::Choice => {
                                    for option in &question.options {
                                        let mark = if show_answers && option.is_correct {
                                            "✅"
                                        } else {
                                            "⭕"
                                        };
                                        ui.weak(format!("   {mark} {}", option.content));
                                    }
                                }
                                QuestionKind::Essay => {
                                    ui.weak("   ✏ Respuesta de desarrollo");
                                }
                            }
                            if show_answers {
                                if let Some(explanation) = &question.explanation {
                                    ui.weak(format!("   💡 {explanation}"));
                                }
                            }
                        }
                    }
                }
                ui.add_space(8.0);
                ui.separator();
            }
        });
    });
}
