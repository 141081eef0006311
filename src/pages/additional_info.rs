//! Additional Information page: the questionnaire and considerations grid.

use leptos::prelude::*;

use crate::components::notes_cell::NotesCell;
use crate::components::questionnaire::QuestionnaireGroup;
use crate::data::options;

/// Additional Information page — four gated questionnaires in the classroom
/// column, with static playground/lunchroom consideration cells alongside
/// and a full-width comments cell at the end.
#[component]
pub fn AdditionalInfoPage() -> impl IntoView {
    let arrangement = &options::ARRANGEMENT;
    let toileting = &options::TOILETING;
    let daily_living = &options::DAILY_LIVING;
    let communication = &options::COMMUNICATION;

    view! {
        <section class="additional-info" aria-labelledby="additional-information-heading">
            <h2 id="additional-information-heading">"Additional Information"</h2>

            <div class="additional-info__table" role="group" aria-label="Additional information grid">
                <div class="additional-info__header additional-info__header--classroom">
                    <h3>"Classroom Arrangement"</h3>
                </div>
                <div class="additional-info__header additional-info__header--environment">
                    <h3>"Environmental Considerations"</h3>
                </div>

                <div class="additional-info__subheader">"Playground"</div>
                <div class="additional-info__subheader">"Lunchroom"</div>

                <div class="additional-info__cell additional-info__cell--classroom">
                    <QuestionnaireGroup config=arrangement/>
                </div>
                <div class="additional-info__cell">
                    <NotesCell
                        id="playground-arrangement"
                        label="Are there playground supports or considerations to note?"
                        placeholder="Describe supervision, equipment, safety, or accessibility needs"
                        rows=6
                    />
                </div>
                <div class="additional-info__cell">
                    <NotesCell
                        id="lunchroom-arrangement"
                        label="Are there lunchroom supports or considerations to note?"
                        placeholder="Describe dietary, seating, or supervision needs"
                        rows=6
                    />
                </div>

                <div class="additional-info__cell additional-info__cell--classroom">
                    <QuestionnaireGroup config=toileting/>
                </div>
                <div class="additional-info__cell">
                    <NotesCell
                        id="playground-toileting"
                        label="Playground considerations"
                        placeholder="Note restroom access, supervision plans, or transition routines during recess"
                    />
                </div>
                <div class="additional-info__cell">
                    <NotesCell
                        id="lunchroom-toileting"
                        label="Lunchroom considerations"
                        placeholder="Describe supports during lunch, snacks, or hygiene after meals"
                    />
                </div>

                <div class="additional-info__cell additional-info__cell--classroom">
                    <QuestionnaireGroup config=daily_living/>
                </div>
                <div class="additional-info__cell">
                    <NotesCell
                        id="playground-daily-living"
                        label="Playground considerations"
                        placeholder="Note supports for snacks, outerwear, or transitions during recess"
                    />
                </div>
                <div class="additional-info__cell">
                    <NotesCell
                        id="lunchroom-daily-living"
                        label="Lunchroom considerations"
                        placeholder="Describe feeding supports, seating, or adaptive equipment"
                    />
                </div>

                <div class="additional-info__cell additional-info__cell--classroom">
                    <QuestionnaireGroup config=communication/>
                </div>
                <div class="additional-info__cell">
                    <NotesCell
                        id="playground-communication"
                        label="Playground considerations"
                        placeholder="Explain how communication devices are protected or used outdoors"
                    />
                </div>
                <div class="additional-info__cell">
                    <NotesCell
                        id="lunchroom-communication"
                        label="Lunchroom considerations"
                        placeholder="Describe communication supports during meals or group conversations"
                    />
                </div>

                <div class="additional-info__cell additional-info__cell--full">
                    <NotesCell
                        id="additional-notes"
                        label="Additional comments or considerations"
                        placeholder="Include transportation plans, behavior supports, or other environmental notes"
                        rows=6
                    />
                </div>
            </div>
        </section>
    }
}
