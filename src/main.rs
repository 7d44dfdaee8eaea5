use anyhow::Context;
use clap::Parser;
use dialoguer::{Confirm, Input};
use hanzi_cards::{cli, config, error, render, store, translator};
use hanzi_cards_common::contact::{validate_contact, ContactForm};
use hanzi_cards_common::translate::{AUTOFILL_BUSY_LABEL, TRANSLATE_FAILED_MESSAGE};
use hanzi_cards_common::{
    dispatch, AppState, CardDraft, Command, DeckListView, LangPair, Render, StudyView, Translator,
};
use cli::{Cli, Commands};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use store::FileStore;
use translator::HttpTranslator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load().context("設定の読み込みに失敗しました")?;

    // 設定コマンドはデッキを開かない
    if let Commands::Config { set_endpoint, show } = &cli.command {
        if let Some(url) = set_endpoint {
            config.set_endpoint(url.clone())?;
            println!("✔ エンドポイントを設定しました");
        }
        if *show || set_endpoint.is_none() {
            println!("設定:");
            println!("  エンドポイント: {}", config.endpoint());
            println!("  保存先: {}", config.store_path()?.display());
        }
        return Ok(());
    }

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => config.store_path()?,
    };
    let mut store = FileStore::open(&store_path);
    let mut state = AppState::hydrate(&mut store);
    let translator = HttpTranslator::new(config.endpoint());
    tracing::debug!(
        store = %store.path().display(),
        endpoint = translator.endpoint(),
        "opened deck"
    );

    match cli.command {
        Commands::Show { flip } => {
            state.set_flipped(flip);
            print_study(&state);
        }
        Commands::Flip => {
            dispatch(&mut state, &mut store, Command::Flip);
            print_study(&state);
        }
        // 空のデッキでも案内を表示する
        Commands::Next => {
            dispatch(&mut state, &mut store, Command::Next);
            print!("{}", render::format_outcome(&state, Render::Study));
        }
        Commands::Prev => {
            dispatch(&mut state, &mut store, Command::Prev);
            print!("{}", render::format_outcome(&state, Render::Study));
        }
        Commands::Shuffle => {
            apply(&mut state, &mut store, Command::Shuffle);
            println!("✔ シャッフルしました");
        }
        Commands::Swap => {
            apply(&mut state, &mut store, Command::SwapDirection);
            println!("✔ 学習方向: {}", state.settings.direction);
        }
        Commands::Pinyin => {
            apply(&mut state, &mut store, Command::TogglePinyin);
            println!(
                "✔ ピンイン: {}",
                if state.settings.show_pinyin { "表示" } else { "非表示" }
            );
        }
        Commands::List => print_deck(&state),
        Commands::Study { id } => {
            let id = cli::resolve_card_id(&state, &id)?;
            apply(&mut state, &mut store, Command::Study(id));
        }
        Commands::Add { cn, en, pinyin, notes, auto_translate } => {
            let mut draft = CardDraft::new(&cn, &en, &pinyin, &notes);
            if auto_translate {
                match with_spinner(translator::autofill_draft(&translator, &draft)).await {
                    Ok(filled) => draft = filled,
                    Err(e) => {
                        tracing::debug!(error = %e, "autofill failed");
                        eprintln!("{}", TRANSLATE_FAILED_MESSAGE);
                    }
                }
            }
            let outcome = dispatch(&mut state, &mut store, Command::Add(draft));
            if outcome.changed() {
                println!("✔ カードを追加しました");
                print_study(&state);
            } else {
                println!("中文と English の両方を入力してください");
            }
        }
        Commands::Edit { id } => {
            let id = cli::resolve_card_id(&state, &id)?;
            edit_card(&mut state, &mut store, id)?;
        }
        Commands::Delete { id } => {
            let id = cli::resolve_card_id(&state, &id)?;
            apply(&mut state, &mut store, Command::Delete(id));
            println!("✔ 削除しました");
        }
        Commands::DeleteCurrent => {
            if dispatch(&mut state, &mut store, Command::DeleteCurrent).changed() {
                println!("✔ 削除しました");
            }
            print_study(&state);
        }
        Commands::Clear { yes } => {
            let ok = yes
                || Confirm::new()
                    .with_prompt("Clear all cards? This cannot be undone.")
                    .default(false)
                    .interact()?;
            if ok {
                apply(&mut state, &mut store, Command::ClearAll);
                println!("✔ 全カードを削除しました");
            }
        }
        Commands::Translate { text, reverse } => {
            let pair = if reverse { LangPair::EN_TO_ZH } else { LangPair::ZH_TO_EN };
            match with_spinner(translator.translate(&text, pair)).await {
                Ok(translated) => println!("{}", translated),
                Err(e) => {
                    tracing::debug!(error = %e, "translate failed");
                    eprintln!("{}", TRANSLATE_FAILED_MESSAGE);
                }
            }
        }
        Commands::Contact { name, email, message } => {
            let outcome = validate_contact(&ContactForm::new(&name, &email, &message));
            print!("{}", render::format_contact(&outcome));
        }
        // デッキを開く前に処理済み
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// コマンドを適用し、再描画範囲に応じて表示する
fn apply(state: &mut AppState, store: &mut FileStore, command: Command) {
    let render = dispatch(state, store, command).render;
    print!("{}", render::format_outcome(state, render));
}

fn print_study(state: &AppState) {
    print!("{}", render::format_study(&StudyView::project(state)));
}

fn print_deck(state: &AppState) {
    print!("{}", render::format_deck_list(&DeckListView::project(state)));
}

/// 翻訳中はスピナーを表示する
async fn with_spinner<F, T>(future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(AUTOFILL_BUSY_LABEL);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = future.await;
    spinner.finish_and_clear();
    result
}

/// カードを取り出して再入力する
///
/// 入力が中断された・保存しなかった場合は元の位置に戻す。
fn edit_card(state: &mut AppState, store: &mut FileStore, id: String) -> error::Result<()> {
    let Some(draft) = dispatch(state, store, Command::Edit(id)).draft else {
        return Ok(());
    };

    let edited = match prompt_draft(&draft) {
        Ok(edited) => edited,
        Err(e) => {
            dispatch(state, store, Command::CancelEdit);
            return Err(e);
        }
    };

    if dispatch(state, store, Command::Add(edited)).changed() {
        println!("✔ カードを更新しました");
        print_study(state);
    } else {
        dispatch(state, store, Command::CancelEdit);
        println!("変更を破棄しました（中文と English は必須です）");
    }
    Ok(())
}

fn prompt_draft(draft: &CardDraft) -> error::Result<CardDraft> {
    let field = |label: &str, initial: &str| -> error::Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?)
    };
    Ok(CardDraft {
        cn: field("中文", &draft.cn)?,
        en: field("English", &draft.en)?,
        pinyin: field("Pinyin", &draft.pinyin)?,
        notes: field("Notes", &draft.notes)?,
    })
}
