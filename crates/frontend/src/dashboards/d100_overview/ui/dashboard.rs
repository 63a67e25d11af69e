use std::sync::Arc;

use contracts::dashboards::d100_overview::{Referral, StatCard};
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d100_overview::view_model::DashboardViewModel;
use crate::shared::chart::svg::SvgCharts;
use crate::shared::chart::{ChartKind, SvgChartSurface};
use crate::shared::data::DataGateway;

/// Only a browser build can mount a drawing surface
const DRAWING_AVAILABLE: bool = cfg!(target_arch = "wasm32");

/// Overview dashboard: stat cards, weekly trend, period breakdown and referrals
#[component]
pub fn OverviewDashboard(gateway: DataGateway) -> impl IntoView {
    let vm = DashboardViewModel::new(gateway, DRAWING_AVAILABLE);
    let surface = SvgChartSurface::new();
    let chart_area = NodeRef::<leptos::html::Div>::new();

    vm.load();

    // The chart container being in the DOM is what makes drawing possible.
    Effect::new(move |_| {
        if chart_area.get().is_some() && !vm.is_surface_attached() {
            vm.attach_surface(Arc::new(surface));
        }
    });

    on_cleanup(move || vm.teardown());

    view! {
        <div id="d100_overview--dashboard" class="dashboard">
            <h1 class="page__title">"Dashboard"</h1>

            <Show when=move || vm.loading.get()>
                <Space gap=SpaceGap::Small>
                    <Spinner />
                    <span>"Cargando datos..."</span>
                </Space>
            </Show>

            <div class="dashboard__stats">
                {move || vm.stats.get().into_iter().map(stat_card).collect_view()}
            </div>

            <div class="dashboard__charts" node_ref=chart_area>
                <section class="dashboard__panel">
                    <h2>"Ventas de la semana"</h2>
                    <SvgCharts surface=surface kind=ChartKind::Line />
                </section>
                <section class="dashboard__panel">
                    <h2>"Ventas por periodo"</h2>
                    <SvgCharts surface=surface kind=ChartKind::Breakdown />
                    <ul class="dashboard__periods">
                        {move || {
                            vm.sales_history
                                .get()
                                .periods
                                .into_iter()
                                .map(|p| view! {
                                    <li>
                                        <span class="dashboard__period-name">{p.name}</span>
                                        <span class="dashboard__period-amount">{p.amount}</span>
                                    </li>
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </div>

            <section class="dashboard__panel">
                <h2>"Referidos"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Fuente"</th>
                            <th>"Visitas"</th>
                            <th>"%"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || vm.referrals.get().into_iter().map(referral_row).collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}

fn stat_card(stat: StatCard) -> impl IntoView {
    let change_class = match stat.change.as_deref() {
        Some(change) if change.starts_with('-') => "stat-card__change stat-card__change--down",
        _ => "stat-card__change stat-card__change--up",
    };
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{stat.title}</div>
            <div class="stat-card__value">{stat.value}</div>
            {stat.change.map(|change| view! { <div class=change_class>{change}</div> })}
        </div>
    }
}

fn referral_row(referral: Referral) -> impl IntoView {
    view! {
        <tr>
            <td>{referral.name}</td>
            <td>{referral.count}</td>
            <td>{format!("{}%", referral.percentage)}</td>
        </tr>
    }
}
