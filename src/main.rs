// src/main.rs
//
// Calculatrice RPN — point d’entrée console
// -----------------------------------------
// infixe (argument) -> postfixe + valeur -> préfixe + valeur, sur stdout.
// Les journaux (tracing) vont sur stderr ; `-v` monte le niveau.

use std::io::{self, Write};
use std::process::ExitCode;

use calculatrice_rpn::app::AppCalc;
use calculatrice_rpn::noyau::rpn::ReglesConversion;
use calculatrice_rpn::noyau::OptionsPipeline;
use clap::Parser;
use tracing::debug;

/// Convertit une expression infixe (jetons d’un caractère, sans parenthèses)
/// en notations postfixe et préfixe, puis évalue les deux.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Affiche aussi les valeurs exactes (rationnels).
    #[arg(short, long)]
    exact: bool,

    /// Rend `^` associatif à droite (2^3^2 = 2^(3^2)).
    #[arg(long)]
    exposant_droite: bool,

    /// Verbosité des journaux : -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression infixe, ex: 3+4*2
    expression: String,
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        fmt::Layer,
        prelude::*,
    };

    let niveau = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(Layer::new().with_writer(io::stderr).with_target(false))
        .with(Targets::new().with_default(niveau))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = OptionsPipeline {
        regles: ReglesConversion {
            exposant_droite: args.exposant_droite,
        },
        exact: args.exact,
    };

    let mut calc = AppCalc::new(options);
    if calc.evalue(args.expression).is_err() {
        debug!(entree = %calc.entree, "évaluation impossible");
        // stderr fermé : rien de plus à signaler
        let _ = calc.rend_erreur(&mut io::stderr());
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = calc.rend(&mut out).and_then(|()| out.flush()) {
        eprintln!("écriture impossible : {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
