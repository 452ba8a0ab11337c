use leptos::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlVideoElement};

use crate::api;
use crate::charts::{self, bar, line, pie};
use crate::components::results::{
    ActionRow, ChartCard, ErrorNotice, ProgressSection, TipsSection,
};
use crate::components::upload_card::UploadCard;
use crate::session;
use crate::state::AppState;
use crate::types::{fmt_num, VideoReport};

const PROGRESS_TICK_MS: u32 = 200;

#[component]
pub fn VideoPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.video;
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let on_file = move |file: web_sys::File| {
        session.select();
        session.set_preview(&file);
        session::submit(session, PROGRESS_TICK_MS, api::analyze_video(file));
    };

    let on_replay = move || {
        if let Some(video) = video_ref.get() {
            let el: &HtmlVideoElement = video.as_ref();
            let _ = el.play();
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    };

    view! {
        <div class="page">
            <UploadCard
                icon="🎬"
                title="영상 파일 업로드"
                hint=".mp4, .mov, .avi 지원"
                accept=".mp4,.mov,.avi"
                on_file=on_file
            />

            {move || {
                session
                    .in_progress()
                    .then(|| view! { <ProgressSection progress=session.progress caption="영상 분석 중…" /> })
            }}

            <ErrorNotice message=session.error />

            {move || {
                session
                    .preview()
                    .map(|src| {
                        view! {
                            <div class="video-panel">
                                <video node_ref=video_ref controls class="video-player" src=src></video>
                            </div>
                        }
                    })
            }}

            {move || {
                session
                    .ready()
                    .then(|| {
                        let report = session.result.get().unwrap_or_default();
                        let tips = report.tips.clone();
                        let summary_block = report.blink_summary.clone().map(|summary| {
                            view! {
                                <div class="blink-summary">
                                    <h3 class="blink-heading">"💬 눈 깜빡임 요약"</h3>
                                    <div class="blink-grid">
                                        <div class="blink-cell">
                                            <p class="blink-label">"영상 길이"</p>
                                            <p class="blink-value">{summary.duration.clone()}</p>
                                        </div>
                                        <div class="blink-cell">
                                            <p class="blink-label">"깜빡임 수"</p>
                                            <p class="blink-value">{summary.blink_count.to_string()}</p>
                                        </div>
                                        <div class="blink-cell">
                                            <p class="blink-label">"분당 깜빡임"</p>
                                            <p class="blink-value">{fmt_num(summary.blinks_per_min)}</p>
                                        </div>
                                        <div class="blink-cell">
                                            <p class="blink-label">"평가 등급"</p>
                                            <p class="blink-value">{summary.grade.clone()}</p>
                                        </div>
                                    </div>
                                    <p class="blink-interpretation">{summary.interpretation}</p>
                                </div>
                            }
                        });

                        view! {
                            <section class="chart-grid three">{video_charts(&report)}</section>
                            {summary_block}
                            {(!tips.is_empty()).then(|| view! { <TipsSection tips=tips /> })}
                            <ActionRow action_label="영상 재생" on_action=on_replay />
                        }
                    })
            }}
        </div>
    }
}

fn video_charts(report: &VideoReport) -> impl IntoView {
    let ratios = report.head_pose_ratios;
    let draw_pose = move |ctx: &CanvasRenderingContext2d, w: f64, h: f64| {
        pie::draw_donut_chart(
            ctx,
            w,
            h,
            &[
                pie::Slice { label: "위", value: ratios.looking_up, color: charts::POSE_UP },
                pie::Slice { label: "정면", value: ratios.looking_front, color: charts::POSE_FRONT },
                pie::Slice { label: "아래", value: ratios.looking_down, color: charts::POSE_DOWN },
            ],
        );
    };

    let pitch_labels: Vec<String> = report.pitch_by_frame.iter().map(|p| fmt_num(p.time_sec)).collect();
    let pitch_values: Vec<f64> = report.pitch_by_frame.iter().map(|p| p.pitch_deg).collect();
    let draw_pitch = move |ctx: &CanvasRenderingContext2d, w: f64, h: f64| {
        line::draw_line_chart(
            ctx,
            w,
            h,
            &pitch_labels,
            &line::Series { points: &pitch_values, color: charts::INDIGO },
            None,
        );
    };

    let blink_labels: Vec<String> = report.blink_timeline.iter().map(|b| b.frame.to_string()).collect();
    let blink_values: Vec<f64> = report.blink_timeline.iter().map(|b| f64::from(b.blink)).collect();
    let draw_blink = move |ctx: &CanvasRenderingContext2d, w: f64, h: f64| {
        bar::draw_bar_chart(ctx, w, h, &blink_labels, &blink_values, charts::GREEN);
    };

    view! {
        <ChartCard title="고개 방향 비율" draw=draw_pose />
        <ChartCard title="Pitch 변화 (도)" draw=draw_pitch />
        <ChartCard title="눈 깜빡임 여부" draw=draw_blink />
    }
}
