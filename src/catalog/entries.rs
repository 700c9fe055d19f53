//! Built-in catalog data

use super::DependencyType::{Dev, Prod};
use super::{ExternalDependency, PackageDescriptor, SetupNote};

pub static CATALOG: &[PackageDescriptor] = &[
    PackageDescriptor {
        name: "express",
        dep_type: Prod,
        notes: &[SetupNote {
            title: "Minimal server (index.js)",
            content: r#"const express = require('express');

const app = express();
app.use(express.json());

app.get('/', (req, res) => res.send('Hello World'));

const port = process.env.PORT || 3000;
app.listen(port, () => console.log(`Listening on port ${port}`));"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "cors",
        dep_type: Prod,
        external_dependencies: &[ExternalDependency {
            name: "@types/cors",
            dep_type: Dev,
        }],
        notes: &[SetupNote {
            title: "Enable CORS for every route",
            content: r#"const cors = require('cors');
app.use(cors());

// Restrict to known origins in production:
app.use(cors({ origin: ['https://example.com'] }));"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "dotenv",
        dep_type: Prod,
        notes: &[
            SetupNote {
                title: "Load .env as early as possible",
                content: "require('dotenv').config();",
            },
            SetupNote {
                title: "Keep secrets out of git",
                content: "echo .env >> .gitignore",
            },
        ],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "mongoose",
        dep_type: Prod,
        notes: &[SetupNote {
            title: "Connect before starting the server",
            content: r#"const mongoose = require('mongoose');

mongoose
  .connect(process.env.MONGODB_URI)
  .then(() => console.log('MongoDB connected'))
  .catch((err) => console.error(err));"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "axios",
        dep_type: Prod,
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "zod",
        dep_type: Prod,
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "jsonwebtoken",
        dep_type: Prod,
        external_dependencies: &[ExternalDependency {
            name: "@types/jsonwebtoken",
            dep_type: Dev,
        }],
        notes: &[SetupNote {
            title: "Sign and verify tokens",
            content: r#"const jwt = require('jsonwebtoken');

const token = jwt.sign({ sub: user.id }, process.env.JWT_SECRET, { expiresIn: '1h' });
const payload = jwt.verify(token, process.env.JWT_SECRET);"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "bcrypt",
        dep_type: Prod,
        external_dependencies: &[ExternalDependency {
            name: "@types/bcrypt",
            dep_type: Dev,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "winston",
        dep_type: Prod,
        notes: &[SetupNote {
            title: "Shared logger (logger.js)",
            content: r#"const { createLogger, format, transports } = require('winston');

module.exports = createLogger({
  level: process.env.LOG_LEVEL || 'info',
  format: format.combine(format.timestamp(), format.json()),
  transports: [new transports.Console()],
});"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "typescript",
        dep_type: Dev,
        external_dependencies: &[
            ExternalDependency {
                name: "@types/node",
                dep_type: Dev,
            },
            ExternalDependency {
                name: "ts-node",
                dep_type: Dev,
            },
        ],
        post_install_scripts: &["npx tsc --init"],
        notes: &[
            SetupNote {
                title: "Suggested tsconfig.json options",
                content: r#"{
  "compilerOptions": {
    "outDir": "./dist",
    "rootDir": "./src",
    "strict": true,
    "esModuleInterop": true
  }
}"#,
            },
            SetupNote {
                title: "Build scripts for package.json",
                content: r#""scripts": {
  "build": "tsc",
  "start": "node dist/index.js"
}"#,
            },
        ],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "nodemon",
        dep_type: Dev,
        notes: &[SetupNote {
            title: "Add a dev script",
            content: r#""scripts": {
  "dev": "nodemon index.js"
}"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "eslint",
        dep_type: Dev,
        external_dependencies: &[
            ExternalDependency {
                name: "@eslint/js",
                dep_type: Dev,
            },
            ExternalDependency {
                name: "globals",
                dep_type: Dev,
            },
        ],
        notes: &[SetupNote {
            title: "Flat config (eslint.config.js)",
            content: r#"const js = require('@eslint/js');
const globals = require('globals');

module.exports = [
  js.configs.recommended,
  { languageOptions: { globals: globals.node } },
];"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "prettier",
        dep_type: Dev,
        external_dependencies: &[ExternalDependency {
            name: "eslint-config-prettier",
            dep_type: Dev,
        }],
        post_install_scripts: &[
            "node --eval \"fs.writeFileSync('.prettierrc','{}\\n')\"",
            "node --eval \"fs.writeFileSync('.prettierignore','# Ignore artifacts:\\nbuild\\ncoverage\\n')\"",
        ],
        notes: &[SetupNote {
            title: "Format the whole project",
            content: "npx prettier . --write",
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "jest",
        dep_type: Dev,
        external_dependencies: &[ExternalDependency {
            name: "@types/jest",
            dep_type: Dev,
        }],
        notes: &[SetupNote {
            title: "Test script",
            content: r#""scripts": {
  "test": "jest"
}"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "vitest",
        dep_type: Dev,
        notes: &[SetupNote {
            title: "Test script",
            content: r#""scripts": {
  "test": "vitest"
}"#,
        }],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "tailwindcss",
        dep_type: Dev,
        external_dependencies: &[
            ExternalDependency {
                name: "postcss",
                dep_type: Dev,
            },
            ExternalDependency {
                name: "autoprefixer",
                dep_type: Dev,
            },
        ],
        post_install_scripts: &["npx tailwindcss init -p"],
        notes: &[
            SetupNote {
                title: "Point tailwind.config.js at your templates",
                content: r#"module.exports = {
  content: ['./src/**/*.{html,js,jsx,ts,tsx}'],
  theme: { extend: {} },
  plugins: [],
};"#,
            },
            SetupNote {
                title: "Add the directives to your main CSS file",
                content: r#"@tailwind base;
@tailwind components;
@tailwind utilities;"#,
            },
        ],
        ..PackageDescriptor::BARE
    },
    PackageDescriptor {
        name: "husky",
        dep_type: Dev,
        external_dependencies: &[ExternalDependency {
            name: "lint-staged",
            dep_type: Dev,
        }],
        post_install_scripts: &["npx husky init"],
        notes: &[SetupNote {
            title: "Run lint-staged before each commit",
            content: r#"echo "npx lint-staged" > .husky/pre-commit

// package.json
"lint-staged": {
  "*.js": "eslint --fix"
}"#,
        }],
        ..PackageDescriptor::BARE
    },
];
