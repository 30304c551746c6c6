use rust_decimal::Decimal;
use yew::prelude::*;

use crate::summary::{format_currency, Totals};

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    amount: Decimal,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border text-center">
            <p class="text-muted-foreground text-[12px] font-bold mb-1 tracking-widest">{ props.title }</p>
            <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_currency(props.amount) }</h3>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseSummaryProps {
    pub totals: Totals,
}

#[function_component(ExpenseSummary)]
pub fn expense_summary(props: &ExpenseSummaryProps) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            <StatCard title="Total" amount={props.totals.total} />
            <StatCard title="Total Cash" amount={props.totals.cash} />
            <StatCard title="Total Credit" amount={props.totals.credit} />
        </div>
    }
}
